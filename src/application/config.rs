use crate::domain::{Algorithm, DEFAULT_DENSITY, Error, Pattern, Result, presets};

/// A pattern stamped onto the board at startup, top-left corner at (x, y)
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub pattern: Pattern,
    pub x: usize,
    pub y: usize,
}

impl Placement {
    pub fn new(pattern: Pattern, x: usize, y: usize) -> Self {
        Self { pattern, x, y }
    }
}

/// Everything needed to build the initial board.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Cells become alive when a uniform draw exceeds this value
    pub density: f64,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    /// Applied in order, each on top of the previous result
    pub placements: Vec<Placement>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            density: DEFAULT_DENSITY,
            seed: None,
            algorithm: Algorithm::default(),
            placements: vec![
                Placement::new(presets::glider(), 50, 50),
                Placement::new(presets::glider(), 10, 50),
                Placement::new(presets::glider(), 50, 10),
            ],
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replace the placement list
    pub fn with_placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = placements;
        self
    }

    pub fn with_placement(mut self, pattern: Pattern, x: usize, y: usize) -> Self {
        self.placements.push(Placement::new(pattern, x, y));
        self
    }

    /// Reject settings that cannot produce a meaningful board.
    /// Placement bounds are checked later, against the real grid.
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() {
            return Err(Error::InvalidDensity(self.density));
        }
        Ok(())
    }
}
