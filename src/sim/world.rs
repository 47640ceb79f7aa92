//! World state - single owner of every live entity
//!
//! The original free-standing entity arrays are restructured as fields of one
//! `World`; all mutation goes through it. Construction validates the config
//! and seeds the RNG, so every per-tick operation afterwards is total.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::render::Renderer;

use super::emitter::Emitter;
use super::explosion::Explosion;

/// The simulation: emitter and explosion populations plus their RNG
#[derive(Debug, Clone)]
pub struct World {
    pub emitters: Vec<Emitter>,
    pub explosions: Vec<Explosion>,
    pub config: SimConfig,
    /// Deterministic stream; every randomized decision draws from here
    pub rng: Pcg32,
    /// Ticks advanced since construction
    pub time_ticks: u64,
}

impl World {
    /// Validate `config` and spawn the initial emitter population at random
    /// in-bounds positions
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let emitters = (0..config.target_emitter_count)
            .map(|_| {
                let position = random_in_bounds(&config, &mut rng);
                Emitter::new(position, config.particle_mass, &mut rng)
            })
            .collect();

        Ok(Self {
            emitters,
            explosions: Vec::new(),
            config,
            rng,
            time_ticks: 0,
        })
    }

    /// Spawn one replenishment emitter at a random in-bounds position
    pub(crate) fn spawn_emitter(&mut self) {
        let position = random_in_bounds(&self.config, &mut self.rng);
        let emitter = Emitter::new(position, self.config.particle_mass, &mut self.rng);
        self.emitters.push(emitter);
    }

    /// Live trail particles across all emitters (for logging/diagnostics)
    pub fn trail_particle_count(&self) -> usize {
        self.emitters.iter().map(|e| e.trail.len()).sum()
    }

    /// Draw every emitter, then every explosion, in stable order
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for emitter in &self.emitters {
            emitter.render(renderer);
        }
        for explosion in &self.explosions {
            explosion.render(renderer);
        }
    }
}

fn random_in_bounds(config: &SimConfig, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..config.width),
        rng.random_range(0.0..config.height),
    )
}
