//! Pointer and touch coordinates to grid cells
//!
//! Coordinates are surface-local pixels offset by the surface origin.
//! col = floor((px - origin_x) / cell_size), row = floor((py - origin_y) / cell_size).
//! Anything landing outside `[0, size)` is ignored.

/// (row, col) under a pointer, or None when it misses the grid
pub fn pointer_to_cell(
    px: f64,
    py: f64,
    origin_x: f64,
    origin_y: f64,
    cell_size: f64,
    size: u32,
) -> Option<(u32, u32)> {
    if cell_size.is_nan() || cell_size <= 0.0 {
        return None;
    }
    let col = ((px - origin_x) / cell_size).floor();
    let row = ((py - origin_y) / cell_size).floor();
    let limit = size as f64;
    // NaN fails every comparison and is rejected here too
    if row >= 0.0 && row < limit && col >= 0.0 && col < limit {
        Some((row as u32, col as u32))
    } else {
        None
    }
}

/// Resolve every touch point, dropping misses and duplicate cells.
/// First occurrence order is kept.
pub fn resolve_touches(
    points: &[(f64, f64)],
    origin_x: f64,
    origin_y: f64,
    cell_size: f64,
    size: u32,
) -> Vec<(u32, u32)> {
    let mut cells: Vec<(u32, u32)> = Vec::with_capacity(points.len());
    for &(px, py) in points {
        if let Some(cell) = pointer_to_cell(px, py, origin_x, origin_y, cell_size, size) {
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// `[x0, y0, x1, y1, ...]` as point pairs; a trailing odd value is ignored
pub fn pairs_from_flat(flat: &[f64]) -> Vec<(f64, f64)> {
    flat.chunks_exact(2).map(|p| (p[0], p[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_pixels_to_row_and_col() {
        assert_eq!(pointer_to_cell(0.0, 0.0, 0.0, 0.0, 12.0, 50), Some((0, 0)));
        assert_eq!(pointer_to_cell(25.0, 13.0, 0.0, 0.0, 12.0, 50), Some((1, 2)));
        assert_eq!(pointer_to_cell(115.0, 30.0, 100.0, 20.0, 10.0, 10), Some((1, 1)));
        assert_eq!(pointer_to_cell(599.9, 599.9, 0.0, 0.0, 12.0, 50), Some((49, 49)));
    }

    #[test]
    fn misses_are_rejected() {
        assert_eq!(pointer_to_cell(-0.1, 5.0, 0.0, 0.0, 10.0, 10), None);
        assert_eq!(pointer_to_cell(5.0, 100.0, 0.0, 0.0, 10.0, 10), None);
        assert_eq!(pointer_to_cell(5.0, 5.0, 10.0, 0.0, 10.0, 10), None);
        assert_eq!(pointer_to_cell(f64::NAN, 5.0, 0.0, 0.0, 10.0, 10), None);
        assert_eq!(pointer_to_cell(5.0, 5.0, 0.0, 0.0, 0.0, 10), None);
    }

    #[test]
    fn duplicate_touches_collapse_to_one_cell() {
        let points = [(1.0, 1.0), (9.0, 9.0), (15.0, 2.0), (200.0, 0.0), (2.0, 3.0)];
        assert_eq!(resolve_touches(&points, 0.0, 0.0, 10.0, 10), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn flat_points_pair_up() {
        assert_eq!(pairs_from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0]), vec![(1.0, 2.0), (3.0, 4.0)]);
    }
}
