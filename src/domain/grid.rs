use super::{Cell, Error, Result};
use rayon::prelude::*;

/// Grid manages the 2D board of liveness values.
/// Edges are hard: cells outside the rectangle do not exist and never count
/// as neighbors. Transitions produce a new grid, the source is never touched.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        // a grid without rows has no columns either
        let width = if height == 0 { 0 } else { width };
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
        }
    }

    /// The 0x0 grid, used as the "no pattern" sentinel
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Build a grid from row literals. Every row must be as long as the first.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().copied().map(Cell::from));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no cells at all
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position, ignored outside the grid
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Borrow one row. Panics if `y` is not a row of this grid.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = self.get_index(0, y);
        &mut self.cells[start..start + self.width]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Copy the grid out as nested row vectors
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors in the 3x3 block around (x, y), clamped to the
    /// grid edges. Corners see 3 neighbors, other edge cells see 5.
    /// (x, y) must lie inside the grid.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );

        let min_x = x.saturating_sub(1);
        let min_y = y.saturating_sub(1);
        let max_x = (x + 1).min(self.width - 1);
        let max_y = (y + 1).min(self.height - 1);

        (min_y..=max_y)
            .flat_map(|ny| (min_x..=max_x).map(move |nx| (nx, ny)))
            .filter(|&pos| pos != (x, y))
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.count_live_neighbors(x, y))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Much faster for grids > 100x100
    pub fn evolve_parallel(&self) -> Self {
        let mut cells = vec![Cell::DEAD; self.cells.len()];
        cells
            .par_chunks_mut(self.width.max(1))
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = self.next_cell(x, y);
                }
            });

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Double-buffered evolution: write the next generation into `next`,
    /// reusing its allocation. `next` is reshaped if its size differs.
    pub fn evolve_into(&self, next: &mut Grid) {
        next.width = self.width;
        next.height = self.height;
        next.cells.resize(self.cells.len(), Cell::DEAD);

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.get_index(x, y);
                next.cells[idx] = self.next_cell(x, y);
            }
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}
