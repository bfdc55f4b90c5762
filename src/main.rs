//! Headless demo drive
//!
//! Generates a world, scrolls the camera up the road for a few seconds of
//! simulated frames, and logs placement/recycle/draw statistics. Pass a JSON
//! config path as the first argument to override the default tuning.
//!
//! Run with `RUST_LOG=info` (or `trace` for per-recycle output).

use glam::Vec2;
use roadside::render::{AssetId, AssetSource, Camera, Canvas2d, Rgba};
use roadside::{World, WorldConfig};

/// Counts draw calls instead of rasterizing
#[derive(Default)]
struct CountingCanvas {
    images: usize,
    lines: usize,
}

impl Canvas2d for CountingCanvas {
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _offset: Vec2) {}
    fn rotate(&mut self, _radians: f32) {}
    fn clip_rect(&mut self, _origin: Vec2, _size: Vec2) {}
    fn draw_image(&mut self, _id: AssetId, _origin: Vec2, _size: Vec2) {
        self.images += 1;
    }
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
        self.lines += 1;
    }
}

/// Fixed-size stand-ins for the real sprite atlas
struct DemoAssets;

impl AssetSource for DemoAssets {
    fn image_size(&self, id: AssetId) -> Option<Vec2> {
        Some(match id {
            AssetId::Ground | AssetId::Road => Vec2::splat(256.0),
            AssetId::Tree => Vec2::new(160.0, 160.0),
            AssetId::Stone => Vec2::new(140.0, 120.0),
            AssetId::House => Vec2::new(420.0, 380.0),
        })
    }
}

fn load_config() -> WorldConfig {
    let Some(path) = std::env::args().nth(1) else {
        return WorldConfig::default();
    };
    match std::fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(|json| {
        WorldConfig::from_json(&json).map_err(|e| e.to_string())
    }) {
        Ok(config) => {
            log::info!("loaded config from {path}");
            config
        }
        Err(err) => {
            log::error!("failed to load {path}: {err}; using defaults");
            WorldConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let seed: u64 = rand::random();
    log::info!("world seed: {seed}");

    let mut world = World::new(config, seed);
    let start = world.generate();

    let viewport = Vec2::new(1280.0, 720.0);
    let mut car_y = start.y;

    // Cruise up the highway at 40 units/frame for ten simulated seconds.
    for frame in 0u32..600 {
        car_y -= 40.0;
        world.update(car_y);

        let mut canvas = CountingCanvas::default();
        let camera = Camera::new(Vec2::new(start.x, car_y), viewport);
        world.draw(&mut canvas, &DemoAssets, &camera);

        if frame % 120 == 0 {
            log::info!(
                "frame {frame}: car_y={car_y:.0}, {} images, {} lines, pool={}",
                canvas.images,
                canvas.lines,
                world.objects.len(),
            );
        }
    }

    log::info!("demo finished at y={car_y:.0}");
}
