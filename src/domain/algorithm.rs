//! Algorithm enum for selecting how a generation is computed.
//!
//! Every variant produces exactly the same next generation; they only differ
//! in how memory and threads are used.

use std::str::FromStr;

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Fresh grid each tick, cell by cell on the calling thread
    #[default]
    Serial,
    /// Fresh grid each tick, rows computed with rayon
    Parallel,
    /// Two grids that swap roles each tick, no per-tick allocation
    DoubleBuffered,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Serial,
            Algorithm::Parallel,
            Algorithm::DoubleBuffered,
        ]
    }

    /// Display name, also accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
            Algorithm::DoubleBuffered => "double-buffered",
        }
    }

    /// Short description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "copy-on-write, single thread",
            Algorithm::Parallel => "copy-on-write, rows in parallel",
            Algorithm::DoubleBuffered => "two buffers swapped each tick",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown algorithm '{s}'"))
    }
}
