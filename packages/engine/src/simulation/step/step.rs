use crate::grid::ALIVE;
use crate::systems::life;

use super::{LifeCore, PerfTimer, Tick};

pub(super) fn advance_frame(world: &mut LifeCore, now_ms: f64) -> bool {
    match world.scheduler.tick(now_ms, world.config.speed) {
        Tick::Step { dropped } => {
            if world.perf_enabled {
                world.perf_stats.skipped_intervals =
                    world.perf_stats.skipped_intervals.saturating_add(dropped);
            }
            step(world);
            true
        }
        Tick::Idle | Tick::Waiting => false,
    }
}

pub(super) fn step(world: &mut LifeCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.begin_step();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // The previous generation stays intact until the new one is complete
    let result = life::step(&world.grid, world.generation);

    if perf_on {
        let mut births = 0u32;
        let mut deaths = 0u32;
        for (&before, &after) in world.grid.cells.iter().zip(result.grid.cells.iter()) {
            match (before == ALIVE, after == ALIVE) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
        }
        world.perf_stats.births = births;
        world.perf_stats.deaths = deaths;
        world.perf_stats.cells_processed = result.grid.len() as u32;
        world.perf_stats.alive = result.alive_count;
        world.perf_stats.grid_size = result.grid.size();
    }

    world.grid = result.grid;
    world.generation = result.generation;
    world.refresh_stats();

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
    }
}
