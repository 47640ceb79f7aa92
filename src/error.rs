//! Construction-time validation errors
//!
//! Everything here is a configuration error: it is surfaced once when a
//! `World` (or one of its entities) is built from invalid parameters, and the
//! caller is expected to refuse to start rather than recover. Per-tick
//! operations have no error paths of their own.

use thiserror::Error;

/// Invalid simulation configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Playfield bounds must both be positive
    #[error("playfield bounds must be positive, got {width}x{height}")]
    NonPositiveBounds { width: f32, height: f32 },

    /// Zero emitters means nothing to simulate
    #[error("target emitter count must be at least 1")]
    ZeroTargetCount,

    /// Force application divides by mass
    #[error("trail particle mass must be positive, got {0}")]
    NonPositiveMass(f32),

    /// The frame driver derives its cadence from this
    #[error("frame rate must be positive, got {0}")]
    NonPositiveFrameRate(u32),
}
