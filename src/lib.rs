//! Roadside - procedural world manager for a top-down driving scene
//!
//! Core modules:
//! - `world`: deterministic world state (placement, recycling)
//! - `render`: viewport-culled drawing against an abstract 2D canvas
//! - `config`: data-driven world tuning

pub mod config;
pub mod render;
pub mod world;

pub use config::WorldConfig;
pub use world::{ObjectKind, World, WorldObject};

/// World tuning constants
pub mod consts {
    /// Clearance margin around the road corridor; object centers may not land
    /// in `[road_x - MARGIN, road_x + road_width + MARGIN]`
    pub const ROAD_MARGIN: f32 = 100.0;
    /// Radius around the vehicle start kept clear during initial population
    pub const SAFE_SPAWN_RADIUS: f32 = 300.0;
    /// Width of the randomized band objects are recycled into, measured back
    /// from the view buffer edge
    pub const RECYCLE_BAND: f32 = 500.0;
    /// Horizontal spread of recycled objects around the road corridor
    pub const RECYCLE_SPREAD: f32 = 5000.0;
    /// Nudge applied when a recycled object lands inside the corridor margin
    pub const ROAD_NUDGE: f32 = 600.0;
    /// Road surface tiles are fixed 256-unit squares regardless of ground
    /// tile size
    pub const ROAD_TILE: f32 = 256.0;
    /// Viewport inflation for object culling
    pub const CULL_MARGIN: f32 = 200.0;
    /// Road border stroke width
    pub const BORDER_WIDTH: f32 = 5.0;
}
