//! Emitters - autonomous drifting bodies with particle trails
//!
//! An emitter moves under its own inertia, sheds trail particles each tick,
//! and dies in two stages: a collision flips it to `Exploded` (motion stops,
//! the world spawns an explosion in its place), then it lingers until its
//! remaining trail drains out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::{Renderer, Rgb, PALETTE};

use super::particle::{random_unit, TrailParticle};

/// Lifecycle state; there is no way back to `Active`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitterState {
    /// Moving, emitting, collidable
    Active,
    /// Inert; waiting for the trail to drain before removal
    Exploded,
}

/// An autonomous moving body that trails particles and explodes on collision
#[derive(Debug, Clone)]
pub struct Emitter {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub color: Rgb,
    /// Collision radius; the collision test uses only this emitter's radius
    pub radius: f32,
    pub state: EmitterState,
    /// Insertion-ordered for stable iteration
    pub trail: Vec<TrailParticle>,
    /// Mass handed to every spawned trail particle
    particle_mass: f32,
}

impl Emitter {
    /// Create an active emitter at `position` with random velocity, palette
    /// color, and radius in [10, 25)
    pub fn new(position: Vec2, particle_mass: f32, rng: &mut impl Rng) -> Self {
        let velocity = random_unit(rng) * rng.random_range(EMITTER_SPEED_MIN..EMITTER_SPEED_MAX);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            color,
            radius: rng.random_range(EMITTER_RADIUS_MIN..EMITTER_RADIUS_MAX),
            state: EmitterState::Active,
            trail: Vec::new(),
            particle_mass,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == EmitterState::Active
    }

    /// Append `count` trail particles at the current position
    pub fn emit(&mut self, count: u32, rng: &mut impl Rng) {
        for _ in 0..count {
            self.trail.push(TrailParticle::new(
                self.position,
                self.particle_mass,
                self.color,
                rng,
            ));
        }
    }

    /// Apply `force` to the emitter and the reaction `-force` to every trail
    /// particle. No-op once exploded.
    pub fn apply_force(&mut self, force: Vec2) {
        if self.state == EmitterState::Exploded {
            return;
        }
        self.acceleration += force;
        let reaction = -force;
        for particle in &mut self.trail {
            particle.apply_force(reaction);
        }
    }

    /// Toroidal wrap: leaving one side re-enters at the opposite side, each
    /// axis independently. Only applies while active.
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        if self.state == EmitterState::Exploded {
            return;
        }
        if self.position.x > width {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = width;
        }
        if self.position.y > height {
            self.position.y = 0.0;
        } else if self.position.y < 0.0 {
            self.position.y = height;
        }
    }

    /// True iff `other` lies within THIS emitter's radius (boundary
    /// inclusive). Intentionally asymmetric: the peer's radius is ignored,
    /// and the rule is not the sum of both radii.
    pub fn collides_with(&self, other: &Emitter) -> bool {
        self.position.distance(other.position) <= self.radius
    }

    /// Idempotent transition to `Exploded`; returns true only on the tick the
    /// transition actually happens, so the caller spawns exactly one
    /// explosion per emitter.
    pub fn explode(&mut self) -> bool {
        if self.state == EmitterState::Exploded {
            return false;
        }
        self.state = EmitterState::Exploded;
        true
    }

    /// Integrate motion while active; always age the trail and drop dead
    /// particles.
    pub fn update(&mut self) {
        if self.state == EmitterState::Active {
            self.velocity += self.acceleration;
            self.position += self.velocity;
            self.acceleration = Vec2::ZERO;
        }

        for particle in &mut self.trail {
            particle.update();
        }
        self.trail.retain(|p| !p.is_dead());
    }

    /// Removal condition: exploded and trail fully drained
    pub fn is_dead(&self) -> bool {
        self.state == EmitterState::Exploded && self.trail.is_empty()
    }

    /// Draw the body (active only) and the surviving trail
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if self.state == EmitterState::Active {
            renderer.fill_circle(self.position, self.radius, self.color, 1.0);
        }
        for particle in &self.trail {
            particle.render(renderer);
        }
    }
}
