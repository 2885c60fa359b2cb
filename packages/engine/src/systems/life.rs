//! Conway's Game of Life, B3/S23 on a torus
//!
//! The step reads only the pre-step grid and writes a fresh buffer, so no cell
//! sees a neighbor's already-updated state. Cost is always size² cells × 8
//! neighbor reads: no early exit and no skipping of quiet regions.

use crate::grid::{Grid, ALIVE, DEAD};

/// One generation plus its population snapshot.
/// `alive_count + dead_count == size * size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub grid: Grid,
    pub generation: u64,
    pub alive_count: u32,
    pub dead_count: u32,
}

impl GenerationResult {
    pub fn new(grid: Grid, generation: u64) -> Self {
        let alive_count = grid.alive_count();
        let dead_count = grid.len() as u32 - alive_count;
        Self { grid, generation, alive_count, dead_count }
    }
}

/// Survive on 2 or 3, birth on exactly 3
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

#[inline]
fn next_row(grid: &Grid, row: u32, out: &mut [u8]) {
    let base = grid.index(row, 0);
    for (col, cell) in out.iter_mut().enumerate() {
        let alive = *fast!(grid.cells, [base + col]) == ALIVE;
        let n = grid.count_neighbors(row, col as u32);
        *cell = if next_state(alive, n) { ALIVE } else { DEAD };
    }
}

/// The next generation of `grid`. `grid` itself is never modified.
pub fn next_generation(grid: &Grid) -> Grid {
    let size = grid.size() as usize;
    let mut next = vec![DEAD; grid.len()];

    // Rows are independent: each reads the old grid and owns its output slice.
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        next.par_chunks_mut(size)
            .enumerate()
            .for_each(|(row, out)| next_row(grid, row as u32, out));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (row, out) in next.chunks_mut(size).enumerate() {
            next_row(grid, row as u32, out);
        }
    }

    Grid::from_cells(grid.size(), next)
}

/// Advance `grid` one generation; `generation` is the pre-step count
pub fn step(grid: &Grid, generation: u64) -> GenerationResult {
    GenerationResult::new(next_generation(grid), generation + 1)
}
