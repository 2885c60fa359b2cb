use crate::core::random::next_unit;
use crate::grid::{Grid, ALIVE};

/// Fresh grid where each cell is independently alive with probability
/// `density` (clamped to [0, 1]). Resetting the generation counter is left
/// to the caller.
pub fn random_fill(size: u32, density: f64, rng_state: &mut u32) -> Grid {
    let density = crate::domain::config::clamp_density(density);
    let mut grid = Grid::new(size);
    for cell in grid.cells.iter_mut() {
        if next_unit(rng_state) < density {
            *cell = ALIVE;
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seed_state;

    #[test]
    fn density_extremes() {
        let mut rng = seed_state(3);
        for size in [1, 10, 37, 100] {
            assert!(random_fill(size, 0.0, &mut rng).is_extinct());
            assert_eq!(random_fill(size, 1.0, &mut rng).alive_count(), size * size);
        }
    }

    #[test]
    fn half_density_is_roughly_half() {
        let mut rng = seed_state(2024);
        let grid = random_fill(100, 0.5, &mut rng);
        let alive = grid.alive_count();
        assert!((4_000..6_000).contains(&alive), "alive = {}", alive);
    }

    #[test]
    fn out_of_range_density_is_clamped() {
        let mut rng = seed_state(5);
        assert!(random_fill(10, -3.0, &mut rng).is_extinct());
        assert_eq!(random_fill(10, 7.0, &mut rng).alive_count(), 100);
    }
}
