use wasm_bindgen::prelude::*;

use crate::grid::Grid;

/// Statistics surface: `alive + dead == size * size`
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    generation: u64,
    alive: u32,
    dead: u32,
}

impl Stats {
    pub fn from_grid(grid: &Grid, generation: u64) -> Self {
        let alive = grid.alive_count();
        Stats { generation, alive, dead: grid.len() as u32 - alive }
    }
}

#[wasm_bindgen]
impl Stats {
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn alive(&self) -> u32 { self.alive }
    #[wasm_bindgen(getter)]
    pub fn dead(&self) -> u32 { self.dead }
}
