// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Startup and tick coordination
pub mod application;

// Presentation layer - drawing the board
pub mod rendering;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Error, Grid, Pattern, Result, place, presets, seed_random};
pub use application::{Placement, Simulation, SimulationConfig};
pub use rendering::{DisplayConfig, Palette};
