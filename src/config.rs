//! Simulation configuration
//!
//! Everything the frame driver passes to `World::new`. Loads from JSON so a
//! run can be reproduced from a small config file plus its seed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Simulation configuration, validated once at world construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Playfield width in world units
    pub width: f32,
    /// Playfield height in world units
    pub height: f32,
    /// Population level the world replenishes toward (one spawn per tick)
    pub target_emitter_count: usize,
    /// RNG seed for reproducible runs
    pub seed: u64,
    /// Mass of every trail particle (force is divided by this)
    pub particle_mass: f32,
    /// Ticks per second for the frame driver
    pub frame_rate: u32,
    /// Animated run (tick forever) vs. a fixed burst of ticks
    pub animate: bool,
    /// Tick count for non-animated runs
    pub iterations: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            target_emitter_count: 10,
            seed: 0,
            particle_mass: 1.0,
            frame_rate: 50,
            animate: true,
            iterations: 100,
        }
    }
}

impl SimConfig {
    /// Check every construction-time invariant, reporting the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositiveBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.target_emitter_count == 0 {
            return Err(ConfigError::ZeroTargetCount);
        }
        if self.particle_mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.particle_mass));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::NonPositiveFrameRate(self.frame_rate));
        }
        Ok(())
    }

    /// Parse a config from JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_bounds() {
        let config = SimConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveBounds { .. })
        ));

        let config = SimConfig {
            height: -10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_target_count() {
        let config = SimConfig {
            target_emitter_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTargetCount));
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let config = SimConfig {
            particle_mass: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveMass(0.0)));
    }

    #[test]
    fn test_json_partial_overrides() {
        let config = SimConfig::from_json(r#"{"width": 800.0, "seed": 42}"#).unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.seed, 42);
        // Untouched fields keep their defaults
        assert_eq!(config.height, 600.0);
        assert_eq!(config.target_emitter_count, 10);
    }
}
