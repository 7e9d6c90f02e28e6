use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building the initial board.
/// Ticking never fails, so nothing here is produced after startup.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("width or height of pattern is zero ({width}x{height})")]
    InvalidPattern { width: usize, height: usize },

    #[error(
        "pattern {pattern_width}x{pattern_height} at ({x}, {y}) does not fit in {grid_width}x{grid_height} grid"
    )]
    OutOfBounds {
        x: usize,
        y: usize,
        pattern_width: usize,
        pattern_height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("seed density must be finite, got {0}")]
    InvalidDensity(f64),
}
