//! Drawing-surface and asset seams
//!
//! These traits decouple the world from the host's rendering stack. The
//! host wires them to whatever it draws with; the tests wire them to fakes.

use glam::Vec2;

use crate::world::ObjectKind;

/// Named image handles the renderer asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Ground,
    Road,
    Tree,
    Stone,
    House,
}

impl AssetId {
    pub fn for_kind(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Tree => AssetId::Tree,
            ObjectKind::Stone => AssetId::Stone,
            ObjectKind::House => AssetId::House,
        }
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Road border gray
pub const BORDER_COLOR: Rgba = Rgba(0x55, 0x55, 0x55, 0xff);

/// Camera center and viewport dimensions, supplied by the caller each frame
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// World-space camera center
    pub center: Vec2,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(center: Vec2, viewport: Vec2) -> Self {
        Self { center, viewport }
    }

    /// World-space rectangle on screen, inflated by `margin` on every side.
    /// Returned as (min, max) corners.
    pub fn view_rect(&self, margin: f32) -> (Vec2, Vec2) {
        let half = self.viewport / 2.0;
        (
            self.center - half - Vec2::splat(margin),
            self.center + half + Vec2::splat(margin),
        )
    }
}

/// Immediate-mode 2D drawing surface with canvas semantics
///
/// Transform and clip state nests through `save`/`restore`. Implementations
/// must tolerate arbitrary coordinates; an out-of-view draw is wasted work,
/// never an error.
pub trait Canvas2d {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    /// Restrict subsequent draws to the given rectangle until `restore`
    fn clip_rect(&mut self, origin: Vec2, size: Vec2);
    /// Blit the named image into the given rectangle
    fn draw_image(&mut self, id: AssetId, origin: Vec2, size: Vec2);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Resolves image handles to their pixel dimensions
///
/// `None` means the asset is not loaded; the renderer silently skips that
/// layer or object.
pub trait AssetSource {
    fn image_size(&self, id: AssetId) -> Option<Vec2>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_rect_inflation() {
        let cam = Camera::new(Vec2::new(100.0, 200.0), Vec2::new(800.0, 600.0));
        let (min, max) = cam.view_rect(200.0);
        assert_eq!(min, Vec2::new(-500.0, -300.0));
        assert_eq!(max, Vec2::new(700.0, 700.0));
    }

    #[test]
    fn test_asset_for_kind() {
        assert_eq!(AssetId::for_kind(ObjectKind::Tree), AssetId::Tree);
        assert_eq!(AssetId::for_kind(ObjectKind::House), AssetId::House);
    }
}
