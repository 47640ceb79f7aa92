//! Driftfire - drifting emitters that collide and burst
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, lifecycle)
//! - `render`: Renderer capability trait and color/shape types
//! - `config`: Data-driven simulation configuration
//! - `error`: Construction-time validation errors

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;

/// Simulation tuning constants
pub mod consts {
    /// Trail particle lifetime range in ticks
    pub const TRAIL_LIFETIME_MIN: i32 = 20;
    pub const TRAIL_LIFETIME_MAX: i32 = 35;

    /// Initial trail particle speed range
    pub const TRAIL_SPEED_MIN: f32 = 1.0;
    pub const TRAIL_SPEED_MAX: f32 = 2.0;

    /// Trail display size mapped from remaining lifetime
    pub const TRAIL_SIZE_MIN: f32 = 1.0;
    pub const TRAIL_SIZE_MAX: f32 = 30.0;

    /// Burst particle velocity damping per tick (multiplicative)
    pub const BURST_DAMPENING: f32 = 0.99;
    /// Burst particle size shrink per tick
    pub const BURST_SIZE_DECAY: f32 = 0.5;
    /// Burst particle initial size range
    pub const BURST_SIZE_MIN: f32 = 12.0;
    pub const BURST_SIZE_MAX: f32 = 20.0;
    /// Burst particle initial speed range
    pub const BURST_SPEED_MIN: f32 = 3.0;
    pub const BURST_SPEED_MAX: f32 = 9.0;
    /// Burst particles below this size are not rendered
    pub const BURST_RENDER_MIN_SIZE: f32 = 1.0;

    /// Burst particle count range per explosion
    pub const BURST_COUNT_MIN: u32 = 60;
    pub const BURST_COUNT_MAX: u32 = 90;
    /// Explosion lifetime range in ticks
    pub const EXPLOSION_LIFETIME_MIN: i32 = 30;
    pub const EXPLOSION_LIFETIME_MAX: i32 = 45;

    /// Emitter collision radius range
    pub const EMITTER_RADIUS_MIN: f32 = 10.0;
    pub const EMITTER_RADIUS_MAX: f32 = 25.0;
    /// Initial emitter speed range
    pub const EMITTER_SPEED_MIN: f32 = 5.0;
    pub const EMITTER_SPEED_MAX: f32 = 7.0;
    /// Trail particles emitted per active emitter per tick
    pub const EMIT_PER_TICK: u32 = 1;
}

/// Linearly remap `value` from [in_min, in_max] to [out_min, out_max]
///
/// No clamping; values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert!((map_range(0.0, 0.0, 35.0, 1.0, 30.0) - 1.0).abs() < 1e-6);
        assert!((map_range(35.0, 0.0, 35.0, 1.0, 30.0) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_range_midpoint() {
        let mid = map_range(5.0, 0.0, 10.0, 0.0, 100.0);
        assert!((mid - 50.0).abs() < 1e-6);
    }
}
