mod algorithm;
mod cell;
mod error;
mod grid;
mod patterns;
mod seeding;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::{Error, Result};
pub use grid::Grid;
pub use patterns::{Pattern, place, presets};
pub use seeding::{DEFAULT_DENSITY, seed_random};
