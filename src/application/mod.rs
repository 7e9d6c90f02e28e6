mod config;
mod simulation;

pub use config::{Placement, SimulationConfig};
pub use simulation::Simulation;
