//! Driftfire entry point
//!
//! Headless frame driver: builds a world from config, ticks it at the
//! configured cadence, and reports what each frame would have drawn.

use std::time::{Duration, Instant};

use driftfire::render::RenderStats;
use driftfire::sim::{tick, World};
use driftfire::SimConfig;

fn load_config() -> SimConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match SimConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::error!("Invalid config {path}: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            log::error!("Cannot read {path}: {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let mut world = match World::new(config) {
        Ok(world) => world,
        Err(err) => {
            // Refuse to start on invalid configuration
            log::error!("Refusing to start: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Driftfire starting: {}x{} playfield, {} emitters, seed {}",
        world.config.width,
        world.config.height,
        world.config.target_emitter_count,
        world.config.seed
    );

    let frame_budget = Duration::from_secs_f64(1.0 / world.config.frame_rate as f64);
    let animate = world.config.animate;
    let iterations = world.config.iterations;

    let mut frame = 0u32;
    loop {
        let started = Instant::now();
        let stats = tick(&mut world);

        if stats.collisions > 0 {
            log::info!(
                "tick {}: {} collisions, {} explosions spawned",
                world.time_ticks,
                stats.collisions,
                stats.explosions_spawned
            );
        }

        let mut drawn = RenderStats::default();
        world.render(&mut drawn);
        log::trace!(
            "tick {}: {} emitters, {} trail particles, {} explosions, {} primitives",
            world.time_ticks,
            world.emitters.len(),
            world.trail_particle_count(),
            world.explosions.len(),
            drawn.total()
        );

        frame += 1;
        if !animate && frame >= iterations {
            log::info!(
                "Finished {iterations} ticks: {} emitters, {} explosions live, {} primitives drawn on the last frame",
                world.emitters.len(),
                world.explosions.len(),
                drawn.total()
            );
            break;
        }

        if let Some(remaining) = frame_budget.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
