use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        (row as usize) * (self.size as usize) + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let size = self.size as usize;
        ((idx / size) as u32, (idx % size) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        let size = self.size as i64;
        row >= 0 && row < size && col >= 0 && col < size
    }

    // === Toroidal wrap ===
    /// Wrap any signed coordinate onto `[0, size)`
    #[inline]
    pub fn wrap(&self, v: i64) -> u32 {
        v.rem_euclid(self.size as i64) as u32
    }

    #[inline]
    pub fn wrapped_index(&self, row: i64, col: i64) -> usize {
        self.index(self.wrap(row), self.wrap(col))
    }
}
