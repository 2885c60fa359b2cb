use wasm_bindgen::prelude::*;

/// Per-step perf snapshot. Timings in milliseconds.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) alive: u32,
    pub(super) grid_size: u32,
    /// Running total of generations not made up after slow frames
    pub(super) skipped_intervals: u32,
}

impl PerfStats {
    /// Clear the per-step fields, keeping running totals and the last render time
    pub(crate) fn begin_step(&mut self) {
        *self = PerfStats {
            render_ms: self.render_ms,
            skipped_intervals: self.skipped_intervals,
            ..PerfStats::default()
        };
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }
    #[wasm_bindgen(getter)]
    pub fn alive(&self) -> u32 { self.alive }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn skipped_intervals(&self) -> u32 { self.skipped_intervals }
}
