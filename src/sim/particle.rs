//! Trail and burst particles
//!
//! Both are short-lived decaying bodies, but their motion models differ:
//! trail particles integrate applied forces and count down a tick lifetime,
//! burst particles coast with multiplicative velocity damping and shrink
//! until they fall below render size.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::map_range;
use crate::render::{BurstShape, Renderer, Rgb};

/// A unit vector in a uniformly random direction
#[inline]
pub(crate) fn random_unit(rng: &mut impl Rng) -> Vec2 {
    Vec2::from_angle(rng.random_range(0.0..TAU))
}

/// Short-lived particle continuously spawned by an active emitter
#[derive(Debug, Clone)]
pub struct TrailParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Force divisor; validated positive at world construction
    pub mass: f32,
    /// Ticks remaining; dead at <= 0
    pub lifetime: i32,
    pub color: Rgb,
}

impl TrailParticle {
    /// Spawn at `position` heading in a random direction at speed [1, 2)
    pub fn new(position: Vec2, mass: f32, color: Rgb, rng: &mut impl Rng) -> Self {
        debug_assert!(mass > 0.0, "mass validated at config time");
        let velocity = random_unit(rng) * rng.random_range(TRAIL_SPEED_MIN..TRAIL_SPEED_MAX);
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass,
            lifetime: rng.random_range(TRAIL_LIFETIME_MIN..TRAIL_LIFETIME_MAX),
            color,
        }
    }

    /// Integrate one tick: accumulate acceleration, advance, age
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
        self.lifetime -= 1;
    }

    /// Accumulate `force / mass` into acceleration for the next update
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    pub fn is_dead(&self) -> bool {
        self.lifetime <= 0
    }

    /// Visual radius derived from remaining lifetime, not stored
    pub fn display_size(&self) -> f32 {
        map_range(
            self.lifetime as f32,
            0.0,
            TRAIL_LIFETIME_MAX as f32,
            TRAIL_SIZE_MIN,
            TRAIL_SIZE_MAX,
        )
    }

    /// Opacity hint fading with remaining lifetime
    pub fn display_alpha(&self) -> f32 {
        (self.lifetime as f32 / TRAIL_LIFETIME_MAX as f32).clamp(0.0, 1.0)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.fill_circle(
            self.position,
            self.display_size(),
            self.color,
            self.display_alpha(),
        );
    }
}

/// A particle belonging to an explosion burst
#[derive(Debug, Clone)]
pub struct BurstParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgb,
    /// Shrinks linearly; below 1 the particle is no longer rendered
    pub size: f32,
    pub shape: BurstShape,
    /// Velocity multiplier per tick
    pub dampening: f32,
}

impl BurstParticle {
    /// Radiate from `position` in a random direction at speed [3, 9)
    pub fn new(position: Vec2, color: Rgb, rng: &mut impl Rng) -> Self {
        let velocity = random_unit(rng) * rng.random_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
        let shape = match rng.random_range(0..3) {
            0 => BurstShape::Square,
            1 => BurstShape::Circle,
            _ => BurstShape::Streak,
        };
        Self {
            position,
            velocity,
            color,
            size: rng.random_range(BURST_SIZE_MIN..BURST_SIZE_MAX),
            shape,
            dampening: BURST_DAMPENING,
        }
    }

    /// Coast one tick: advance, damp velocity, shrink
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity *= self.dampening;
        self.size -= BURST_SIZE_DECAY;
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        if self.size < BURST_RENDER_MIN_SIZE {
            return;
        }
        let size = self.size.round();
        match self.shape {
            BurstShape::Square => renderer.fill_square(self.position, size, self.color),
            BurstShape::Circle => renderer.fill_circle(self.position, size, self.color, 1.0),
            BurstShape::Streak => {
                // Deterministic streak along the particle's heading
                let tip = self.position + self.velocity.normalize_or_zero() * self.size;
                renderer.stroke_line(self.position, tip, self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderStats, PALETTE};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn trail(lifetime: i32) -> TrailParticle {
        TrailParticle {
            position: Vec2::ZERO,
            velocity: Vec2::new(1.0, 0.0),
            acceleration: Vec2::ZERO,
            mass: 1.0,
            lifetime,
            color: PALETTE[0],
        }
    }

    #[test]
    fn test_trail_lifetime_counts_down_one_per_update() {
        let mut p = trail(3);
        p.update();
        assert_eq!(p.lifetime, 2);
        p.update();
        assert_eq!(p.lifetime, 1);
        assert!(!p.is_dead());
        p.update();
        assert!(p.is_dead());
    }

    #[test]
    fn test_trail_dead_after_exactly_35_updates() {
        let mut p = trail(35);
        for _ in 0..34 {
            p.update();
        }
        assert!(!p.is_dead());
        p.update();
        assert!(p.is_dead());
    }

    #[test]
    fn test_trail_force_integration() {
        let mut p = trail(10);
        p.velocity = Vec2::ZERO;
        p.mass = 2.0;
        p.apply_force(Vec2::new(4.0, -2.0));
        assert!((p.acceleration.x - 2.0).abs() < 1e-6);
        assert!((p.acceleration.y - (-1.0)).abs() < 1e-6);

        p.update();
        // Velocity picked up the acceleration, position moved by it
        assert!((p.velocity.x - 2.0).abs() < 1e-6);
        assert!((p.position.x - 2.0).abs() < 1e-6);
        // Acceleration resets each tick
        assert_eq!(p.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_trail_display_size_shrinks_with_lifetime() {
        let fresh = trail(35);
        let old = trail(1);
        assert!(fresh.display_size() > old.display_size());
        assert!((trail(0).display_size() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_trail_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let p = TrailParticle::new(Vec2::ZERO, 1.0, PALETTE[0], &mut rng);
            assert!((20..35).contains(&p.lifetime));
            let speed = p.velocity.length();
            assert!((1.0..2.0).contains(&speed), "speed {speed} out of range");
        }
    }

    #[test]
    fn test_burst_update_shrinks_and_advances() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = BurstParticle::new(Vec2::ZERO, PALETTE[1], &mut rng);
        let size0 = p.size;
        let v0 = p.velocity;
        p.update();
        assert!((p.size - (size0 - 0.5)).abs() < 1e-6);
        assert_eq!(p.position, v0);
    }

    #[test]
    fn test_burst_below_min_size_not_rendered() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = BurstParticle::new(Vec2::ZERO, PALETTE[1], &mut rng);
        p.size = 0.9;
        let mut stats = RenderStats::default();
        p.render(&mut stats);
        assert_eq!(stats.total(), 0);

        p.size = 1.0;
        p.render(&mut stats);
        assert_eq!(stats.total(), 1);
    }

    proptest! {
        #[test]
        fn prop_burst_velocity_decays_geometrically(
            speed in 3.0f32..9.0,
            angle in 0.0f32..std::f32::consts::TAU,
            steps in 0usize..60,
        ) {
            let mut p = BurstParticle {
                position: Vec2::ZERO,
                velocity: Vec2::from_angle(angle) * speed,
                color: PALETTE[0],
                size: 15.0,
                shape: BurstShape::Circle,
                dampening: BURST_DAMPENING,
            };
            for _ in 0..steps {
                p.update();
            }
            let expected = speed * BURST_DAMPENING.powi(steps as i32);
            prop_assert!((p.velocity.length() - expected).abs() < 1e-3);
        }
    }
}
