//! Grid - square toroidal cell matrix
//!
//! One byte per cell, row-major, `size * size` cells:
//!     cells[row * size + col]  // 0 = dead, 1 = alive
//!
//! Bytes rather than bools so neighbor counts are plain sums.
//! Both axes wrap modulo `size` for neighbor lookups; direct reads and writes
//! outside `[0, size)` are rejected instead.

mod indexing;
mod cells;
mod neighbors;

pub use neighbors::{count_neighbors, NEIGHBOR_OFFSETS};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    pub(crate) cells: Vec<u8>,
}

impl Grid {
    /// All-dead grid. A zero size is bumped to 1 so indexing never divides by zero.
    pub fn new(size: u32) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![DEAD; (size as usize) * (size as usize)],
        }
    }

    /// Wrap an already-computed cell buffer (used by the generation step)
    pub(crate) fn from_cells(size: u32, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), (size as usize) * (size as usize));
        Self { size, cells }
    }

    /// Build a grid from text rows, `#` alive and anything else dead.
    /// Missing rows and columns stay dead; extra ones are ignored.
    pub fn from_rows(size: u32, rows: &[&str]) -> Self {
        let mut grid = Grid::new(size);
        for (row, line) in rows.iter().enumerate().take(grid.size as usize) {
            for (col, ch) in line.chars().enumerate().take(grid.size as usize) {
                if ch == '#' {
                    grid.set(row as u32, col as u32, true);
                }
            }
        }
        grid
    }

    /// Raw cell bytes, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
