//! Torus Snake - the classic Snake game in the terminal
//!
//! This library provides:
//! - Core game logic on a wraparound grid (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
