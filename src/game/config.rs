use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::{Grid, MAX_SIDE};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid, in cells
    pub grid_width: usize,
    /// Height of the game grid, in cells
    pub grid_height: usize,
    /// Side of one cell, in pixels
    pub cell_size: u32,
    /// Simulation and render rate
    pub ticks_per_second: u32,
    /// Fixed RNG seed; rounds are random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            ticks_per_second: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_width > 0, "grid width must be at least 1");
        ensure!(self.grid_height > 0, "grid height must be at least 1");
        ensure!(self.cell_size > 0, "cell size must be at least 1");
        ensure!(self.ticks_per_second > 0, "tick rate must be at least 1");
        ensure!(
            self.grid_width <= MAX_SIDE && self.grid_height <= MAX_SIDE,
            "grid sides must be at most {} cells",
            MAX_SIDE
        );
        ensure!(
            self.grid().pixel_size().is_some(),
            "a {}x{} grid of {}px cells is too large",
            self.grid_width,
            self.grid_height,
            self.cell_size
        );
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height, self.cell_size)
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
