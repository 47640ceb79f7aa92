//! Explosions - one-shot particle bursts with a fixed lifespan
//!
//! The whole burst is created at construction and pruned as a unit when the
//! lifetime runs out, independent of how faded its particles are.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::render::{Renderer, Rgb};

use super::particle::BurstParticle;

/// A burst of particles radiating from a collision site
#[derive(Debug, Clone)]
pub struct Explosion {
    /// Fixed at creation
    pub position: Vec2,
    pub color: Rgb,
    /// Created once; never added to or removed from individually
    pub particles: Vec<BurstParticle>,
    /// Ticks remaining; dead at <= 0
    pub lifetime: i32,
}

impl Explosion {
    /// Burst [60, 90) particles from `position`, living [30, 45) ticks
    pub fn new(position: Vec2, color: Rgb, rng: &mut impl Rng) -> Self {
        let count = rng.random_range(BURST_COUNT_MIN..BURST_COUNT_MAX);
        let particles = (0..count)
            .map(|_| BurstParticle::new(position, color, rng))
            .collect();
        Self {
            position,
            color,
            particles,
            lifetime: rng.random_range(EXPLOSION_LIFETIME_MIN..EXPLOSION_LIFETIME_MAX),
        }
    }

    /// Age the burst one tick; individual particles are never pruned
    pub fn update(&mut self) {
        self.lifetime -= 1;
        for particle in &mut self.particles {
            particle.update();
        }
    }

    pub fn is_dead(&self) -> bool {
        self.lifetime <= 0
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        for particle in &self.particles {
            particle.render(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PALETTE;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_created_up_front() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..50 {
            let e = Explosion::new(Vec2::new(50.0, 50.0), PALETTE[0], &mut rng);
            assert!((60..90).contains(&e.particles.len()));
            assert!((30..45).contains(&e.lifetime));
            for p in &e.particles {
                assert_eq!(p.position, Vec2::new(50.0, 50.0));
                let speed = p.velocity.length();
                assert!((3.0..9.0).contains(&speed));
            }
        }
    }

    #[test]
    fn test_dead_after_exactly_lifetime_updates() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut e = Explosion::new(Vec2::ZERO, PALETTE[0], &mut rng);
        let lifetime = e.lifetime;

        for _ in 0..lifetime - 1 {
            e.update();
        }
        assert!(!e.is_dead());
        e.update();
        assert!(e.is_dead());
    }

    #[test]
    fn test_particle_count_never_changes() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut e = Explosion::new(Vec2::ZERO, PALETTE[0], &mut rng);
        let count = e.particles.len();

        // Well past the point where every particle has shrunk below render
        // size; the collection itself is untouched.
        for _ in 0..100 {
            e.update();
        }
        assert_eq!(e.particles.len(), count);
        assert!(e.is_dead());
    }
}
