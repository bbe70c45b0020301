//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The playfield is a torus: leaving one edge re-enters on the opposite one.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, Phase, StepResult};
pub use food::Food;
pub use grid::Grid;
pub use state::{MoveOutcome, Position, Snake};
