use super::*;

impl Grid {
    /// Out-of-range reads are dead
    #[inline]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        row < self.size && col < self.size && self.cells[self.index(row, col)] == ALIVE
    }

    /// Returns false (and writes nothing) when out of range
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, alive: bool) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
        true
    }

    /// Flip one cell, returning its new state (None when out of range)
    pub fn toggle(&mut self, row: u32, col: u32) -> Option<bool> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let idx = self.index(row, col);
        self.cells[idx] ^= ALIVE;
        Some(self.cells[idx] == ALIVE)
    }

    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    pub fn alive_count(&self) -> u32 {
        self.cells.iter().map(|&c| c as u32).sum()
    }

    pub fn dead_count(&self) -> u32 {
        self.len() as u32 - self.alive_count()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&c| c == DEAD)
    }

    /// Live cells as (row, col), row-major order
    pub fn live_cells(&self) -> Vec<(u32, u32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ALIVE)
            .map(|(idx, _)| self.coords(idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let mut grid = Grid::new(10);
        assert_eq!(grid.toggle(3, 4), Some(true));
        assert_eq!(grid.alive_count(), 1);
        assert!(grid.is_alive(3, 4));
        assert_eq!(grid.toggle(3, 4), Some(false));
        assert!(grid.is_extinct());
    }

    #[test]
    fn out_of_range_writes_are_rejected() {
        let mut grid = Grid::new(10);
        assert!(!grid.set(10, 0, true));
        assert_eq!(grid.toggle(0, 10), None);
        assert!(!grid.is_alive(42, 42));
        assert!(grid.is_extinct());
    }

    #[test]
    fn counts_cover_every_cell() {
        let grid = Grid::from_rows(12, &["##..#", ".#", "", "#"]);
        assert_eq!(grid.alive_count(), 5);
        assert_eq!(grid.alive_count() + grid.dead_count(), 144);
        assert_eq!(grid.live_cells(), vec![(0, 0), (0, 1), (0, 4), (1, 1), (3, 0)]);
    }

    #[test]
    fn zero_size_is_bumped_to_one() {
        let grid = Grid::new(0);
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.len(), 1);
    }
}
