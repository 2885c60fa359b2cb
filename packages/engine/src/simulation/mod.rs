//! Life session - one owned state object per canvas
//!
//! `LifeCore` holds the grid, config, generation counter, statistics and
//! scheduler. All mutation happens synchronously on the caller's thread:
//! - systems/        - pure grid functions (step, placement, fill)
//! - commands        - user edits (toggle, preset, random, clear)
//! - settings        - config setters with clamping, resize
//! - step            - engine step + perf bookkeeping
//! - schedule        - Paused/Running state machine
//! - input           - pointer/touch to cell mapping
//! - facade          - wasm-bindgen surface and frame loop wiring

use std::sync::Arc;

use crate::domain::config::SimulationConfig;
use crate::domain::patterns::PatternCatalog;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "stats/stats.rs"]
mod stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "schedule/scheduler.rs"]
pub mod scheduler;
#[path = "input/input.rs"]
pub mod input;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "frame/frame_loop.rs"]
pub mod frame_loop;
mod facade;

pub use facade::{Life, RenderLayout};
pub use perf_stats::PerfStats;
pub use scheduler::{RunState, Scheduler, Tick};
pub use stats::Stats;

pub(crate) use perf_timer::{now_ms, PerfTimer};

/// The simulation session
pub struct LifeCore {
    patterns: Arc<PatternCatalog>,
    grid: Grid,
    config: SimulationConfig,
    scheduler: Scheduler,

    // State
    generation: u64,
    stats: Stats,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LifeCore {
    /// Empty grid of the (clamped) requested size, generation 0, Paused
    pub fn new(grid_size: i64) -> Self {
        init::create_life_core(grid_size, crate::core::random::entropy_seed())
    }

    /// Same as `new` with a fixed RNG seed
    pub fn with_seed(grid_size: i64, seed: u32) -> Self {
        init::create_life_core(grid_size, seed)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn size(&self) -> u32 { self.grid.size() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn stats(&self) -> Stats { self.stats }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    pub fn patterns(&self) -> &PatternCatalog { &self.patterns }

    pub fn scheduler(&self) -> &Scheduler { &self.scheduler }

    pub fn is_running(&self) -> bool { self.scheduler.is_running() }

    // === Run state ===

    pub fn play(&mut self) -> bool {
        self.scheduler.play()
    }

    pub fn pause(&mut self) -> bool {
        self.scheduler.pause()
    }

    pub fn toggle_running(&mut self) -> bool {
        if self.scheduler.is_running() {
            self.scheduler.pause();
        } else {
            self.scheduler.play();
        }
        self.scheduler.is_running()
    }

    /// One frame callback: advance at most one generation if the interval
    /// has elapsed. Returns whether a generation was computed.
    pub fn advance_frame(&mut self, now_ms: f64) -> bool {
        step::advance_frame(self, now_ms)
    }

    /// Advance exactly one generation, running or not
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Commands ===

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> bool {
        commands::toggle_cell(self, row, col)
    }

    pub fn pointer_down(&mut self, px: f64, py: f64, origin_x: f64, origin_y: f64) -> bool {
        commands::pointer_down(self, px, py, origin_x, origin_y)
    }

    /// Toggle every distinct cell hit by the touch points; returns the count
    pub fn touch_start(&mut self, points: &[(f64, f64)], origin_x: f64, origin_y: f64) -> u32 {
        commands::touch_start(self, points, origin_x, origin_y)
    }

    pub fn place_pattern(&mut self, name: &str) -> Result<(), crate::domain::error::EngineError> {
        commands::place_pattern(self, name)
    }

    pub fn load_patterns_json(&mut self, json: &str) -> Result<usize, crate::domain::error::EngineError> {
        commands::load_patterns_json(self, json)
    }

    /// Random fill at the configured density
    pub fn randomize(&mut self) {
        let density = self.config.density;
        commands::random_fill(self, density);
    }

    pub fn random_fill(&mut self, density: f64) {
        commands::random_fill(self, density);
    }

    /// All dead, generation 0; run state unchanged
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Clear and pause
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === Settings ===

    pub fn set_speed(&mut self, speed: i64) {
        settings::set_speed(self, speed);
    }

    pub fn set_grid_size(&mut self, size: i64) {
        settings::set_grid_size(self, size);
    }

    pub fn set_show_grid(&mut self, show: bool) {
        settings::set_show_grid(self, show);
    }

    pub fn set_alive_color(&mut self, color: &str) -> Result<(), crate::domain::error::EngineError> {
        settings::set_alive_color(self, color)
    }

    pub fn set_dead_color(&mut self, color: &str) -> Result<(), crate::domain::error::EngineError> {
        settings::set_dead_color(self, color)
    }

    pub fn set_grid_line_color(&mut self, color: &str) -> Result<(), crate::domain::error::EngineError> {
        settings::set_grid_line_color(self, color)
    }

    pub fn set_density(&mut self, density: f64) {
        settings::set_density(self, density);
    }

    pub fn set_canvas_size(&mut self, px: i64) {
        settings::set_canvas_size(self, px);
    }

    pub fn apply_config_json(&mut self, json: &str) -> Result<(), crate::domain::error::EngineError> {
        settings::apply_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    pub(crate) fn record_render_ms(&mut self, ms: f64) {
        if self.perf_enabled {
            self.perf_stats.render_ms = ms;
        }
    }

    pub(crate) fn perf_enabled(&self) -> bool { self.perf_enabled }

    /// Recompute the statistics surface from the current grid
    fn refresh_stats(&mut self) {
        self.stats = Stats::from_grid(&self.grid, self.generation);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
