//! World tuning configuration
//!
//! Data-driven analog of the hardcoded scene constants: grid dimensions,
//! corridor width, pool size, spawn and recycle ranges. Serializable so a
//! host can load alternate tunings from JSON.

use serde::{Deserialize, Serialize};

/// World tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Ground tile edge length in world units
    pub tile_size: f32,
    /// Map edge length in tiles (the map is square)
    pub map_size: u32,
    /// Road corridor width
    pub road_width: f32,
    /// Object pool size requested at generation (rejections may yield fewer)
    pub object_count: usize,
    /// Vertical half-range around the start point for initial placement
    pub spawn_range: f32,
    /// Maximum vertical distance from the vehicle before an object is
    /// recycled to the other side
    pub view_buffer: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: 256.0,
            map_size: 100,
            road_width: 400.0,
            object_count: 200,
            spawn_range: 3000.0,
            view_buffer: 4000.0,
        }
    }
}

impl WorldConfig {
    /// World edge length in world units
    pub fn world_extent(&self) -> f32 {
        self.tile_size * self.map_size as f32
    }

    /// Parse a config from JSON (same shape as the serialized default)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
