use super::{Cell, Error, Grid, Result};

/// Stamp `pattern` onto a copy of `destination` with its top-left corner at
/// column `x`, row `y`. The whole pattern rectangle is copied, dead cells
/// included. Neither input is modified.
pub fn place(destination: &Grid, pattern: &Grid, x: usize, y: usize) -> Result<Grid> {
    let (pattern_width, pattern_height) = pattern.dimensions();
    if pattern_width == 0 || pattern_height == 0 {
        return Err(Error::InvalidPattern {
            width: pattern_width,
            height: pattern_height,
        });
    }

    let (grid_width, grid_height) = destination.dimensions();
    let fits_x = x.checked_add(pattern_width).is_some_and(|right| right <= grid_width);
    let fits_y = y.checked_add(pattern_height).is_some_and(|bottom| bottom <= grid_height);
    if !(fits_x && fits_y) {
        return Err(Error::OutOfBounds {
            x,
            y,
            pattern_width,
            pattern_height,
            grid_width,
            grid_height,
        });
    }

    let mut result = destination.clone();
    for (dy, values) in pattern.rows().enumerate() {
        result.row_mut(y + dy)[x..x + pattern_width].copy_from_slice(values);
    }
    Ok(result)
}

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    grid: Grid,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: &[(usize, usize)]) -> Self {
        let width = cells.iter().map(|(x, _)| *x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|(_, y)| *y + 1).max().unwrap_or(0);
        let mut grid = Grid::new(width, height);
        for &(x, y) in cells {
            grid.set(x, y, Cell::ALIVE);
        }
        Self {
            name,
            description,
            grid,
        }
    }

    /// Create a pattern from row literals, e.g. `[[0, 1, 0], [0, 0, 1], [1, 1, 1]]`
    pub fn from_rows<R: AsRef<[i32]>>(
        name: &'static str,
        description: &'static str,
        rows: &[R],
    ) -> Result<Self> {
        Ok(Self {
            name,
            description,
            grid: Grid::from_rows(rows)?,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Place pattern on a copy of `grid` at the specified position
    pub fn place_on(&self, grid: &Grid, x: usize, y: usize) -> Result<Grid> {
        place(grid, &self.grid, x, y)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally down-right
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            &[
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), lwss(), r_pentomino(), block()]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
