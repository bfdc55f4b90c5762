//! World state and core object types
//!
//! The world is created once per session and mutated every frame. Objects
//! are recycled in place, never individually destroyed, so the pool size is
//! constant after generation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::ROAD_MARGIN;

/// Scenery/obstacle categories scattered alongside the road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Tree,
    Stone,
    House,
}

impl ObjectKind {
    /// Clearance radius at scale 1.0
    pub fn base_radius(&self) -> f32 {
        match self {
            ObjectKind::Tree => 30.0,
            ObjectKind::Stone => 35.0,
            ObjectKind::House => 100.0,
        }
    }

    /// Scale range for the per-object randomized draw
    pub fn scale_range(&self) -> (f32, f32) {
        match self {
            ObjectKind::Tree | ObjectKind::Stone => (0.3, 0.6),
            ObjectKind::House => (0.6, 1.0),
        }
    }

    /// Houses stay axis-aligned; everything else gets a random orientation
    pub fn rotates(&self) -> bool {
        !matches!(self, ObjectKind::House)
    }
}

/// A placed scenery object
///
/// Recycling rewrites `pos` in place; everything else is fixed at spawn time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldObject {
    /// World-space position (center)
    pub pos: Vec2,
    pub kind: ObjectKind,
    /// Rotation in radians (always 0 for `House`)
    pub angle: f32,
    pub scale: f32,
    /// Derived clearance radius (kind base radius × scale)
    pub radius: f32,
}

impl WorldObject {
    /// Center-distance overlap test against a candidate footprint
    pub fn overlaps(&self, pos: Vec2, radius: f32) -> bool {
        self.pos.distance(pos) < self.radius + radius
    }
}

/// The scrolling world: grid dimensions, road corridor, object pool, RNG
pub struct World {
    pub config: WorldConfig,
    /// World extent in world units (tile_size × map_size)
    pub width: f32,
    pub height: f32,
    /// Left edge of the road corridor (fixed for the session)
    pub road_x: f32,
    pub road_width: f32,
    pub objects: Vec<WorldObject>,
    /// Seed this world was created with, kept for reproducing a run
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    pub fn new(config: WorldConfig, seed: u64) -> Self {
        let extent = config.world_extent();
        let road_width = config.road_width;
        Self {
            width: extent,
            height: extent,
            // Centered from the start so drawing before generate() is sane;
            // generate() re-derives the same value.
            road_x: (extent - road_width) / 2.0,
            road_width,
            objects: Vec::with_capacity(config.object_count),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// World center, which is also the vehicle start position
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether an x coordinate falls inside the corridor plus clearance margin
    pub fn in_road_margin(&self, x: f32) -> bool {
        x > self.road_x - ROAD_MARGIN && x < self.road_x + self.road_width + ROAD_MARGIN
    }
}
