//! Viewport-culled scene drawing
//!
//! The world draws through two injected seams: a `Canvas2d` with
//! immediate-mode 2D canvas semantics, and an `AssetSource` resolving named
//! images to pixel dimensions. No window or GPU types leak in here, which
//! keeps the draw pass testable with a recording canvas.

pub mod draw;
pub mod surface;

pub use surface::{AssetId, AssetSource, Camera, Canvas2d, Rgba};
