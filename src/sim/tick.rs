//! Per-tick simulation step
//!
//! Pass order is the contract: the collision pass fully completes (both
//! members of a colliding pair marked exploded) before anything moves, so a
//! colliding pair never travels further in the tick its collision is
//! detected. Replenishment runs before pruning and is capped at one spawn
//! per tick, giving gradual recovery rather than an instant refill.

use crate::consts::EMIT_PER_TICK;
use crate::render::Rgb;

use glam::Vec2;

use super::explosion::Explosion;
use super::world::World;

/// What happened during one tick, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Colliding pairs detected this tick
    pub collisions: usize,
    /// New explosions (two per colliding pair)
    pub explosions_spawned: usize,
    /// Replenishment spawns (0 or 1)
    pub emitters_spawned: usize,
    /// Emitters removed (exploded with drained trails)
    pub emitters_pruned: usize,
    /// Explosions removed (lifetime expired)
    pub explosions_pruned: usize,
}

/// Advance the world by one tick
pub fn tick(world: &mut World) -> TickStats {
    let mut stats = TickStats::default();

    // 1. Collision pass: every unordered pair (i, j), i < j, in current
    // iteration order. An emitter exploded by an earlier pair is skipped in
    // later pairs. Both members of a colliding pair explode, each spawning
    // its own explosion.
    let mut bursts: Vec<(Vec2, Rgb)> = Vec::new();
    for i in 0..world.emitters.len() {
        for j in (i + 1)..world.emitters.len() {
            let (head, tail) = world.emitters.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if !a.is_active() || !b.is_active() {
                continue;
            }
            if a.collides_with(b) {
                stats.collisions += 1;
                if a.explode() {
                    bursts.push((a.position, a.color));
                }
                if b.explode() {
                    bursts.push((b.position, b.color));
                }
            }
        }
    }
    for (position, color) in bursts {
        log::debug!(
            "tick {}: collision burst at ({:.1}, {:.1})",
            world.time_ticks,
            position.x,
            position.y
        );
        let explosion = Explosion::new(position, color, &mut world.rng);
        world.explosions.push(explosion);
        stats.explosions_spawned += 1;
    }

    // 2. Emission and boundary pass (active emitters only)
    let (width, height) = (world.config.width, world.config.height);
    for i in 0..world.emitters.len() {
        if world.emitters[i].is_active() {
            let emitter = &mut world.emitters[i];
            emitter.emit(EMIT_PER_TICK, &mut world.rng);
            emitter.wrap_edges(width, height);
        }
    }

    // 3. Integration pass: motion for active emitters, trail aging for all,
    // lifetime and burst aging for explosions
    for emitter in &mut world.emitters {
        emitter.update();
    }
    for explosion in &mut world.explosions {
        explosion.update();
    }

    // 4. Replenishment: at most one new emitter per tick
    if world.emitters.len() < world.config.target_emitter_count {
        world.spawn_emitter();
        stats.emitters_spawned = 1;
        log::debug!(
            "tick {}: replenished population to {}",
            world.time_ticks,
            world.emitters.len()
        );
    }

    // 5. Pruning
    let before = world.emitters.len();
    world.emitters.retain(|e| !e.is_dead());
    stats.emitters_pruned = before - world.emitters.len();

    let before = world.explosions.len();
    world.explosions.retain(|e| !e.is_dead());
    stats.explosions_pruned = before - world.explosions.len();

    world.time_ticks += 1;
    stats
}
