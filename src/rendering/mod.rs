use macroquad::prelude::*;
use std::time::Duration;
use crate::domain::Grid;

/// Colors used to draw the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid_lines: Color,
    pub alive: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::new(0.2, 0.2, 0.2, 1.0),
            grid_lines: Color::new(0.1, 0.1, 0.1, 1.0),
            alive: Color::from_rgba(127, 255, 212, 255), // aquamarine
            text: WHITE,
        }
    }
}

/// Presentation settings, independent of the simulation itself
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    pub palette: Palette,
    /// Pause after each frame
    pub frame_delay: Option<Duration>,
    pub show_grid_lines: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 8.0,
            palette: Palette::default(),
            frame_delay: Some(Duration::from_millis(10)),
            show_grid_lines: true,
        }
    }
}

impl DisplayConfig {
    /// Window size in pixels needed to show a `width` x `height` board
    pub fn window_size(&self, width: usize, height: usize) -> (i32, i32) {
        (
            (width as f32 * self.cell_size).ceil() as i32,
            (height as f32 * self.cell_size).ceil() as i32,
        )
    }

    /// Screen rectangle (x, y, w, h) of the cell at grid position (x, y)
    pub fn cell_rect(&self, x: usize, y: usize) -> (f32, f32, f32, f32) {
        (
            x as f32 * self.cell_size,
            y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }
}

/// Draw the board: background, cell lattice, then every live cell
pub fn draw_grid(grid: &Grid, display: &DisplayConfig) {
    let palette = &display.palette;
    clear_background(palette.background);

    let draw_lines = display.show_grid_lines && display.cell_size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy, w, h) = display.cell_rect(x, y);

        if draw_lines {
            draw_rectangle_lines(sx, sy, w, h, 1.0, palette.grid_lines);
        }
        if cell.is_alive() {
            // leave a one pixel gap so neighbors stay distinguishable
            let gap = if display.cell_size > 2.0 { 1.0 } else { 0.0 };
            draw_rectangle(sx, sy, w - gap, h - gap, palette.alive);
        }
    }
}

/// Draw the status line: FPS, generation and population
pub fn draw_status(display: &DisplayConfig, fps: i32, generation: u64, population: usize) {
    let text = format!("FPS: {fps} | gen {generation} | alive {population}");
    draw_text(&text, 6.0, 18.0, 20.0, display.palette.text);
}
