//! Rejection-sampling object placement
//!
//! `try_spawn` draws a single candidate and either places it or silently
//! gives up. A caller asking for N objects can end up with fewer; that is
//! the density control mechanism, not a bug, and callers must not assume a
//! call placed anything.

use glam::Vec2;
use rand::Rng;

use super::state::{ObjectKind, World, WorldObject};
use crate::consts::SAFE_SPAWN_RADIUS;

impl World {
    /// Regenerate the world around its center
    ///
    /// Clears the object pool, recenters the road corridor, and runs the
    /// initial placement pass. Returns the vehicle start position. Calling
    /// this again fully replaces world state.
    pub fn generate(&mut self) -> Vec2 {
        let center = self.center();
        self.road_x = center.x - self.road_width / 2.0;
        self.objects.clear();

        let count = self.config.object_count;
        let range = self.config.spawn_range;
        for _ in 0..count {
            self.try_spawn(center, range, true);
        }

        log::info!(
            "generated world: {}/{} objects placed, road x [{}, {}]",
            self.objects.len(),
            count,
            self.road_x,
            self.road_x + self.road_width,
        );
        center
    }

    /// Attempt to place one object near `reference`
    ///
    /// The candidate spreads vertically within `±range` of the reference and
    /// horizontally across twice the world width. Returns the placed object,
    /// or `None` when the candidate was rejected by the road corridor, the
    /// safe start zone (`initial` only), or an overlap with an existing
    /// object. The overlap scan is O(pool size) and dominates generation.
    pub fn try_spawn(
        &mut self,
        reference: Vec2,
        range: f32,
        initial: bool,
    ) -> Option<&WorldObject> {
        // Wide spread: x may land outside the map bounds on purpose, the
        // recycler folds strays back toward the road later.
        let x = (self.rng.random::<f32>() - 0.5) * self.width * 2.0 + reference.x;
        let y = reference.y + (self.rng.random::<f32>() - 0.5) * 2.0 * range;
        let pos = Vec2::new(x, y);

        if self.in_road_margin(x) {
            return None;
        }
        if initial && pos.distance_squared(reference) < SAFE_SPAWN_RADIUS * SAFE_SPAWN_RADIUS {
            return None;
        }

        let kind = match self.rng.random::<f32>() {
            r if r < 0.70 => ObjectKind::Tree,
            r if r < 0.95 => ObjectKind::Stone,
            _ => ObjectKind::House,
        };
        let (lo, hi) = kind.scale_range();
        let scale = self.rng.random_range(lo..hi);
        let radius = kind.base_radius() * scale;
        let angle = if kind.rotates() {
            self.rng.random_range(0.0..std::f32::consts::TAU)
        } else {
            0.0
        };

        for obj in &self.objects {
            if obj.overlaps(pos, radius) {
                // A fresh tree may sit on top of a stone; every other pair
                // rejects the candidate.
                if kind == ObjectKind::Tree && obj.kind == ObjectKind::Stone {
                    continue;
                }
                return None;
            }
        }

        self.objects.push(WorldObject {
            pos,
            kind,
            angle,
            scale,
            radius,
        });
        self.objects.last()
    }
}
