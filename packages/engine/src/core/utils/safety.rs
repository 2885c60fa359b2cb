//! Zero-Cost Safety Macros
//!
//! Debug builds keep normal bounds-checked indexing so a bad offset panics with
//! a useful message. Release builds use unchecked access for the hot cell
//! loops, where every index has already been wrapped into `[0, size²)`.
//!
//! Usage:
//! ```rust
//! use lifegrid_engine::fast;
//!
//! let cells = vec![0u8, 1, 1, 0];
//! // Read: fast!(slice, [index])
//! let alive = *fast!(cells, [2]);
//! assert_eq!(alive, 1);
//!
//! let mut next = vec![0u8; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(next, [3] = 1);
//! assert_eq!(next[3], 1);
//! ```

/// Bounds-checked in debug, unchecked in release
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_matches_indexing() {
        let cells = vec![0u8, 1, 0, 1];
        assert_eq!(*fast!(cells, [1]), 1);
        assert_eq!(*fast!(cells, [2]), 0);
    }

    #[test]
    fn fast_write_sets_cell() {
        let mut cells = vec![0u8; 9];
        fast!(cells, [4] = 1);
        assert_eq!(cells.iter().map(|&c| c as u32).sum::<u32>(), 1);
        assert_eq!(cells[4], 1);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_read_out_of_range_panics_in_debug() {
        let cells = vec![0u8; 4];
        let _ = *fast!(cells, [4]);
    }
}
