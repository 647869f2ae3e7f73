//! # life_engine
//!
//! Conway's Game of Life on a fixed-size board, rendered to the terminal.
//! Neighbors beyond the edges of the board are counted as dead.

pub mod cells;
pub mod config;
pub mod grid;
pub mod render;
pub mod simulation;
pub mod stepper;

pub use cells::Cell;
pub use config::Config;
pub use grid::Grid;
pub use simulation::Simulation;
pub use stepper::step;
