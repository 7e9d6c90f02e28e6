use super::SimulationConfig;
use crate::domain::{Algorithm, Grid, Result, seed_random};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::mem;
use std::time::Instant;

/// Simulation owns the live board and advances it one generation per tick.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    /// Previous generation, reused as the write target when double buffering
    back: Grid,
    algorithm: Algorithm,
    generation: u64,
    last_evolution_time_ms: f32,
}

impl Simulation {
    /// Validate `config` and build the initial board with an RNG seeded from
    /// `config.seed`, or from the OS when no seed is set.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Build the initial board: allocate, seed, then stamp every placement
    /// in order. Any placement error aborts startup.
    pub fn with_rng<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height);
        seed_random(&mut grid, config.density, rng);

        for placement in &config.placements {
            grid = placement.pattern.place_on(&grid, placement.x, placement.y)?;
            log::debug!(
                "placed {} at ({}, {})",
                placement.pattern.name,
                placement.x,
                placement.y
            );
        }

        let (width, height) = grid.dimensions();
        log::info!(
            "initial board {}x{}: {} live cells, {} placements, {} algorithm",
            width,
            height,
            grid.population(),
            config.placements.len(),
            config.algorithm.name()
        );

        Ok(Self {
            grid,
            back: Grid::empty(),
            algorithm: config.algorithm,
            generation: 0,
            last_evolution_time_ms: 0.0,
        })
    }

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        let start = Instant::now();

        match self.algorithm {
            Algorithm::Serial => self.grid = self.grid.evolve(),
            Algorithm::Parallel => self.grid = self.grid.evolve_parallel(),
            Algorithm::DoubleBuffered => {
                self.grid.evolve_into(&mut self.back);
                mem::swap(&mut self.grid, &mut self.back);
            }
        }

        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// The current generation, valid until the next `tick`
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Switch strategy; takes effect on the next tick
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn last_evolution_time_ms(&self) -> f32 {
        self.last_evolution_time_ms
    }
}
