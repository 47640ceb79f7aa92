//! Deterministic simulation module
//!
//! All lifecycle logic lives here. This module must be pure and deterministic:
//! - Tick-driven only, no wall-clock reads
//! - Seeded RNG only, injected into every randomized constructor
//! - Stable iteration order over the entity collections
//! - No rendering or platform dependencies

pub mod emitter;
pub mod explosion;
pub mod particle;
pub mod tick;
pub mod world;

pub use emitter::{Emitter, EmitterState};
pub use explosion::Explosion;
pub use particle::{BurstParticle, TrailParticle};
pub use tick::{tick, TickStats};
pub use world::World;
