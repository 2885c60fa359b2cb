//! Centered pattern overlay
//!
//! The pattern's top-left lands at `floor((size - rows) / 2)`,
//! `floor((size - cols) / 2)`, which is negative when the pattern is larger
//! than the grid. Cells that fall outside `[0, size)` are dropped, not
//! wrapped. Covered cells take the pattern's value (dead included); all other
//! cells keep their state.

use crate::domain::patterns::PatternDefinition;
use crate::grid::Grid;

/// Top-left (row, col) of a centered pattern
pub fn pattern_origin(size: u32, pattern: &PatternDefinition) -> (i64, i64) {
    let size = size as i64;
    (
        (size - pattern.rows() as i64).div_euclid(2),
        (size - pattern.cols() as i64).div_euclid(2),
    )
}

/// Overlay in place; returns the number of cells written
pub fn overlay_pattern(grid: &mut Grid, pattern: &PatternDefinition) -> usize {
    let (start_row, start_col) = pattern_origin(grid.size(), pattern);
    let mut written = 0;
    for (pr, row) in pattern.cells().iter().enumerate() {
        for (pc, &alive) in row.iter().enumerate() {
            let r = start_row + pr as i64;
            let c = start_col + pc as i64;
            if grid.in_bounds(r, c) {
                grid.set(r as u32, c as u32, alive);
                written += 1;
            }
        }
    }
    written
}

/// New grid = `grid` with `pattern` overlaid at the center
pub fn place_pattern(grid: &Grid, pattern: &PatternDefinition) -> Grid {
    let mut next = grid.clone();
    overlay_pattern(&mut next, pattern);
    next
}
