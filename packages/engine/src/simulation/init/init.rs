use std::sync::Arc;

use crate::core::random::seed_state;
use crate::domain::config::{clamp_grid_size, SimulationConfig};
use crate::domain::patterns::PatternCatalog;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::{LifeCore, Scheduler, Stats};

pub(super) fn create_life_core(grid_size: i64, seed: u32) -> LifeCore {
    let size = clamp_grid_size(grid_size);
    let config = SimulationConfig { grid_size: size, ..SimulationConfig::default() };
    let grid = Grid::new(size);

    console_log!("life session created: {}x{} grid", size, size);

    LifeCore {
        patterns: Arc::new(PatternCatalog::builtin()),
        stats: Stats::from_grid(&grid, 0),
        grid,
        config,
        scheduler: Scheduler::new(),
        generation: 0,
        rng_state: seed_state(seed),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
