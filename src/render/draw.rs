//! Scene rendering: tiled ground, the road corridor, visible objects
//!
//! Purely a function of the current camera and asset handles; the world adds
//! no per-frame render state. Every layer culls to the viewport so the cost
//! is O(visible geometry) regardless of world extent.

use glam::Vec2;

use super::surface::{AssetId, AssetSource, BORDER_COLOR, Camera, Canvas2d};
use crate::consts::{BORDER_WIDTH, CULL_MARGIN, ROAD_MARGIN, ROAD_TILE};
use crate::world::World;

impl World {
    /// Draw the visible slice of the world
    pub fn draw(&self, canvas: &mut impl Canvas2d, assets: &impl AssetSource, camera: &Camera) {
        self.draw_ground(canvas, assets, camera);
        self.draw_road(canvas, assets, camera);
        self.draw_objects(canvas, assets, camera);
    }

    /// Tile the ground layer across the viewport, one tile of overdraw on
    /// each edge for seamless coverage while scrolling
    fn draw_ground(&self, canvas: &mut impl Canvas2d, assets: &impl AssetSource, camera: &Camera) {
        if assets.image_size(AssetId::Ground).is_none() {
            return;
        }
        let tile = self.config.tile_size;
        let start_col = ((camera.center.x - camera.viewport.x / 2.0) / tile).floor() as i64;
        let end_col = start_col + (camera.viewport.x / tile).ceil() as i64 + 1;
        let start_row = ((camera.center.y - camera.viewport.y / 2.0) / tile).floor() as i64;
        let end_row = start_row + (camera.viewport.y / tile).ceil() as i64 + 1;

        for c in start_col..=end_col {
            for r in start_row..=end_row {
                canvas.draw_image(
                    AssetId::Ground,
                    Vec2::new(c as f32 * tile, r as f32 * tile),
                    Vec2::splat(tile),
                );
            }
        }
    }

    /// Draw the road as a clipped vertical strip of 256-unit tiles spanning
    /// the visible extent, then the two solid border lines
    fn draw_road(&self, canvas: &mut impl Canvas2d, assets: &impl AssetSource, camera: &Camera) {
        if assets.image_size(AssetId::Road).is_none() {
            return;
        }
        let view_top = camera.center.y - camera.viewport.y / 2.0;
        let view_bottom = camera.center.y + camera.viewport.y / 2.0;

        canvas.save();
        canvas.clip_rect(
            Vec2::new(self.road_x, view_top - ROAD_MARGIN),
            Vec2::new(self.road_width, view_bottom - view_top + 2.0 * ROAD_MARGIN),
        );

        let row_start = (view_top / ROAD_TILE).floor() as i64 - 1;
        let row_end = (view_bottom / ROAD_TILE).floor() as i64 + 1;
        let col_start = (self.road_x / ROAD_TILE).floor() as i64;
        let col_end = ((self.road_x + self.road_width) / ROAD_TILE).floor() as i64 + 1;
        for r in row_start..=row_end {
            for c in col_start..col_end {
                canvas.draw_image(
                    AssetId::Road,
                    Vec2::new(c as f32 * ROAD_TILE, r as f32 * ROAD_TILE),
                    Vec2::splat(ROAD_TILE),
                );
            }
        }
        canvas.restore();

        let right = self.road_x + self.road_width;
        canvas.stroke_line(
            Vec2::new(self.road_x, view_top),
            Vec2::new(self.road_x, view_bottom),
            BORDER_WIDTH,
            BORDER_COLOR,
        );
        canvas.stroke_line(
            Vec2::new(right, view_top),
            Vec2::new(right, view_bottom),
            BORDER_WIDTH,
            BORDER_COLOR,
        );
    }

    /// Draw objects inside the viewport plus the cull margin, centered on
    /// their position, rotated unless the kind is axis-aligned
    fn draw_objects(&self, canvas: &mut impl Canvas2d, assets: &impl AssetSource, camera: &Camera) {
        let (min, max) = camera.view_rect(CULL_MARGIN);
        for obj in &self.objects {
            if obj.pos.x <= min.x || obj.pos.x >= max.x || obj.pos.y <= min.y || obj.pos.y >= max.y
            {
                continue;
            }
            let id = AssetId::for_kind(obj.kind);
            let Some(img) = assets.image_size(id) else {
                continue;
            };
            let size = img * obj.scale;

            canvas.save();
            canvas.translate(obj.pos);
            if obj.kind.rotates() {
                canvas.rotate(obj.angle);
            }
            canvas.draw_image(id, -size / 2.0, size);
            canvas.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::render::surface::Rgba;
    use crate::world::{ObjectKind, WorldObject};

    /// Records draw calls instead of rasterizing
    #[derive(Debug, Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Save,
        Restore,
        Translate(Vec2),
        Rotate(f32),
        Clip(Vec2, Vec2),
        Image(AssetId, Vec2, Vec2),
        Line(Vec2, Vec2, f32),
    }

    impl Canvas2d for RecordingCanvas {
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }
        fn translate(&mut self, offset: Vec2) {
            self.ops.push(Op::Translate(offset));
        }
        fn rotate(&mut self, radians: f32) {
            self.ops.push(Op::Rotate(radians));
        }
        fn clip_rect(&mut self, origin: Vec2, size: Vec2) {
            self.ops.push(Op::Clip(origin, size));
        }
        fn draw_image(&mut self, id: AssetId, origin: Vec2, size: Vec2) {
            self.ops.push(Op::Image(id, origin, size));
        }
        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, _color: Rgba) {
            self.ops.push(Op::Line(from, to, width));
        }
    }

    impl RecordingCanvas {
        fn images(&self, id: AssetId) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::Image(i, _, _) if *i == id))
                .count()
        }
    }

    /// Fixed-size stand-ins for the sprite atlas; `None` for missing ids
    struct FakeAssets {
        missing: Vec<AssetId>,
    }

    impl FakeAssets {
        fn all() -> Self {
            Self { missing: vec![] }
        }
        fn without(missing: &[AssetId]) -> Self {
            Self {
                missing: missing.to_vec(),
            }
        }
    }

    impl AssetSource for FakeAssets {
        fn image_size(&self, id: AssetId) -> Option<Vec2> {
            if self.missing.contains(&id) {
                return None;
            }
            Some(match id {
                AssetId::Ground | AssetId::Road => Vec2::splat(256.0),
                AssetId::Tree => Vec2::new(160.0, 160.0),
                AssetId::Stone => Vec2::new(140.0, 120.0),
                AssetId::House => Vec2::new(420.0, 380.0),
            })
        }
    }

    fn empty_world() -> World {
        let mut world = World::new(WorldConfig::default(), 1);
        world.generate();
        world.objects.clear();
        world
    }

    fn push_object(world: &mut World, pos: Vec2, kind: ObjectKind, angle: f32) {
        world.objects.push(WorldObject {
            pos,
            kind,
            angle,
            scale: 0.5,
            radius: kind.base_radius() * 0.5,
        });
    }

    fn camera_at(world: &World) -> Camera {
        Camera::new(world.center(), Vec2::new(1280.0, 720.0))
    }

    #[test]
    fn test_ground_tile_grid_covers_viewport() {
        let world = empty_world();
        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::without(&[AssetId::Road]), &camera_at(&world));

        // 1280/256 = 5 columns, 720/256 → 3 rows, plus the +1 overdraw and
        // the inclusive end index on each axis.
        assert_eq!(canvas.images(AssetId::Ground), 7 * 5);
    }

    #[test]
    fn test_missing_ground_skips_layer_only() {
        let world = empty_world();
        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::without(&[AssetId::Ground]), &camera_at(&world));

        assert_eq!(canvas.images(AssetId::Ground), 0);
        // Road strip and borders still drawn
        assert!(canvas.images(AssetId::Road) > 0);
        assert_eq!(
            canvas.ops.iter().filter(|op| matches!(op, Op::Line(..))).count(),
            2
        );
    }

    #[test]
    fn test_missing_road_skips_tiles_and_borders() {
        let world = empty_world();
        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::without(&[AssetId::Road]), &camera_at(&world));

        assert_eq!(canvas.images(AssetId::Road), 0);
        assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Line(..))));
        assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Clip(..))));
    }

    #[test]
    fn test_road_clipped_to_corridor() {
        let world = empty_world();
        let camera = camera_at(&world);
        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::all(), &camera);

        let view_top = camera.center.y - camera.viewport.y / 2.0;
        let clip = canvas
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Clip(origin, size) => Some((*origin, *size)),
                _ => None,
            })
            .expect("road clip missing");
        assert_eq!(clip.0, Vec2::new(12600.0, view_top - 100.0));
        assert_eq!(clip.1, Vec2::new(400.0, 720.0 + 200.0));

        // Border lines sit exactly on the corridor edges
        let lines: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(from, to, width) => Some((*from, *to, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0.x, 12600.0);
        assert_eq!(lines[1].0.x, 13000.0);
        assert_eq!(lines[0].2, 5.0);
    }

    #[test]
    fn test_objects_culled_outside_margin() {
        let mut world = empty_world();
        let center = world.center();
        // One just inside the 200-unit margin, one just outside
        push_object(&mut world, center + Vec2::new(0.0, 360.0 + 199.0), ObjectKind::Stone, 1.0);
        push_object(&mut world, center + Vec2::new(0.0, 360.0 + 201.0), ObjectKind::Stone, 1.0);
        // And one far away entirely
        push_object(&mut world, center + Vec2::new(9000.0, 0.0), ObjectKind::Tree, 1.0);

        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::all(), &camera_at(&world));
        assert_eq!(canvas.images(AssetId::Stone), 1);
        assert_eq!(canvas.images(AssetId::Tree), 0);
    }

    #[test]
    fn test_house_not_rotated_tree_rotated() {
        let mut world = empty_world();
        let center = world.center();
        push_object(&mut world, center + Vec2::new(300.0, 0.0), ObjectKind::House, 0.0);
        push_object(&mut world, center - Vec2::new(300.0, 0.0), ObjectKind::Tree, 1.25);

        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::without(&[AssetId::Ground, AssetId::Road]), &camera_at(&world));

        let rotations: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Rotate(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(rotations, vec![1.25]);
    }

    #[test]
    fn test_object_drawn_centered_and_scaled() {
        let mut world = empty_world();
        let center = world.center();
        push_object(&mut world, center + Vec2::new(300.0, 0.0), ObjectKind::House, 0.0);

        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::without(&[AssetId::Ground, AssetId::Road]), &camera_at(&world));

        // House sprite is 420x380 at scale 0.5: translated to the object,
        // blitted centered at half size.
        assert_eq!(
            canvas.ops,
            vec![
                Op::Save,
                Op::Translate(center + Vec2::new(300.0, 0.0)),
                Op::Image(AssetId::House, Vec2::new(-105.0, -95.0), Vec2::new(210.0, 190.0)),
                Op::Restore,
            ]
        );
    }

    #[test]
    fn test_missing_object_asset_skipped() {
        let mut world = empty_world();
        let center = world.center();
        push_object(&mut world, center + Vec2::new(300.0, 0.0), ObjectKind::Tree, 0.5);

        let mut canvas = RecordingCanvas::default();
        world.draw(
            &mut canvas,
            &FakeAssets::without(&[AssetId::Ground, AssetId::Road, AssetId::Tree]),
            &camera_at(&world),
        );
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_save_restore_balanced() {
        let mut world = empty_world();
        let center = world.center();
        for i in 0..5 {
            push_object(&mut world, center + Vec2::new(250.0 + i as f32 * 90.0, 0.0), ObjectKind::Tree, 0.1);
        }
        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::all(), &camera_at(&world));

        let saves = canvas.ops.iter().filter(|op| matches!(op, Op::Save)).count();
        let restores = canvas.ops.iter().filter(|op| matches!(op, Op::Restore)).count();
        assert_eq!(saves, restores);
    }

    #[test]
    fn test_huge_camera_draws_no_objects() {
        // Out-of-range camera values cull everything rather than crash
        let mut world = empty_world();
        let center = world.center();
        push_object(&mut world, center, ObjectKind::Tree, 0.0);
        let camera = Camera::new(Vec2::splat(1.0e12), Vec2::new(1280.0, 720.0));
        let mut canvas = RecordingCanvas::default();
        world.draw(&mut canvas, &FakeAssets::without(&[AssetId::Ground, AssetId::Road]), &camera);
        assert_eq!(canvas.images(AssetId::Tree), 0);
    }
}
