//! Deterministic world simulation module
//!
//! All placement and recycling logic lives here. This module must stay pure
//! and deterministic:
//! - Seeded RNG only (a `Pcg32` owned by the world)
//! - Stable iteration order (objects by insertion index)
//! - No rendering or platform dependencies

pub mod recycle;
pub mod spawn;
pub mod state;

pub use state::{ObjectKind, World, WorldObject};
