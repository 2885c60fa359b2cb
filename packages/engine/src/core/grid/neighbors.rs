use super::*;

/// The 8 Moore-neighborhood offsets as (d_row, d_col)
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Grid {
    /// Live neighbors of (row, col), 0..=8.
    ///
    /// Offsets wrap modulo `size`, so edge and corner cells see 8 neighbors
    /// like any interior cell. On tiny grids (size < 3) the same physical cell
    /// can be reached through more than one offset and is counted each time.
    #[inline]
    pub fn count_neighbors(&self, row: u32, col: u32) -> u8 {
        let (row, col) = (row as i64, col as i64);
        let mut n = 0u8;
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
            n += *fast!(self.cells, [self.wrapped_index(row + dr, col + dc)]);
        }
        n
    }
}

/// Free-function form of [`Grid::count_neighbors`]
#[inline]
pub fn count_neighbors(grid: &Grid, row: u32, col: u32) -> u8 {
    grid.count_neighbors(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_wraps_diagonally_and_along_row() {
        let mut grid = Grid::new(10);
        grid.set(0, 0, true);
        assert_eq!(count_neighbors(&grid, 9, 9), 1);
        assert_eq!(count_neighbors(&grid, 0, 1), 1);
        assert_eq!(count_neighbors(&grid, 9, 0), 1);
        assert_eq!(count_neighbors(&grid, 0, 0), 0);
        assert_eq!(count_neighbors(&grid, 5, 5), 0);
    }

    #[test]
    fn wrapped_index_folds_any_offset() {
        let grid = Grid::new(10);
        assert_eq!(grid.wrap(-1), 9);
        assert_eq!(grid.wrap(10), 0);
        assert_eq!(grid.wrap(-21), 9);
        assert_eq!(grid.wrapped_index(-1, -1), grid.index(9, 9));
        assert_eq!(grid.wrapped_index(10, 3), grid.index(0, 3));
    }

    #[test]
    fn full_grid_gives_eight_everywhere() {
        let mut grid = Grid::new(10);
        grid.cells.fill(ALIVE);
        for row in [0, 4, 9] {
            for col in [0, 5, 9] {
                assert_eq!(grid.count_neighbors(row, col), 8);
            }
        }
    }

    #[test]
    fn counting_does_not_mutate() {
        let grid = Grid::from_rows(10, &[".#.", "###"]);
        let before = grid.clone();
        for row in 0..10 {
            for col in 0..10 {
                let _ = grid.count_neighbors(row, col);
            }
        }
        assert_eq!(grid, before);
    }
}
