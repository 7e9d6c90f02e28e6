//! Random initial population.

use super::{Cell, Grid};
use rand::Rng;

/// Default threshold: roughly half of the cells start alive.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Draw a uniform value in `[0, 1)` for every cell and make the cell alive
/// when the draw is strictly greater than `density`. Cells that lose the draw
/// keep whatever value they already had.
///
/// This is the only in-place mutation of a grid and is meant to run once on a
/// freshly allocated board.
pub fn seed_random<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) {
    grid.cells_mut().iter_mut().for_each(|cell| {
        if rng.random::<f64>() > density {
            *cell = Cell::ALIVE;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    /// Source that always yields the same word
    struct Constant(u64);

    impl RngCore for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.iter_mut().for_each(|b| *b = self.0 as u8);
        }
    }

    #[test]
    fn test_zero_draw_never_exceeds_full_density() {
        let mut grid = Grid::new(6, 4);
        seed_random(&mut grid, 1.0, &mut Constant(0));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut grid = Grid::new(6, 4);
        seed_random(&mut grid, 0.0, &mut Constant(0));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_negative_density_fills_grid() {
        let mut grid = Grid::new(6, 4);
        seed_random(&mut grid, -1.0, &mut Constant(0));
        assert_eq!(grid.population(), 24);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::ALIVE));
    }

    #[test]
    fn test_high_draw_fills_grid() {
        let mut grid = Grid::new(3, 3);
        seed_random(&mut grid, DEFAULT_DENSITY, &mut Constant(u64::MAX));
        assert_eq!(grid.population(), 9);
    }

    #[test]
    fn test_losing_cells_keep_value() {
        let mut grid = Grid::from_rows(&[[3, 0], [0, -2]]).unwrap();
        seed_random(&mut grid, 1.0, &mut Constant(0));
        assert_eq!(grid.to_rows(), vec![vec![3, 0], vec![0, -2]]);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        seed_random(&mut a, DEFAULT_DENSITY, &mut StdRng::seed_from_u64(7));
        seed_random(&mut b, DEFAULT_DENSITY, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.population() > 0 && a.population() < 400);
    }

    #[test]
    fn test_empty_grid_is_noop() {
        let mut grid = Grid::empty();
        seed_random(&mut grid, -1.0, &mut Constant(0));
        assert!(grid.is_empty());
    }
}
