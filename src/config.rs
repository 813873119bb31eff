//! Static map configuration.
//!
//! A [`GridConfig`] is an explicit value handed to the environment on
//! construction. [`GridConfig::default`] reproduces the stock 5x5 map.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{GridError, Result};
use crate::types::{Cell, ACTION_SPACE};

/// Map and reward constants of a grid world.
///
/// Unknown JSON keys are ignored, so an `actions` entry in a file has no
/// effect: every environment uses [`ACTION_SPACE`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid size as `(rows, cols)`
    pub size: (usize, usize),
    pub start: Cell,
    pub target: Cell,
    pub forbidden: Vec<Cell>,
    pub reward_target: f32,
    /// Penalty for hitting a wall or trying to enter a forbidden cell
    pub reward_forbidden: f32,
    pub reward_step: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            size: (5, 5),
            start: Cell::new(0, 0),
            target: Cell::new(4, 4),
            forbidden: vec![Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 1)],
            reward_target: 10.0,
            reward_forbidden: -5.0,
            reward_step: -0.1,
        }
    }
}

impl GridConfig {
    pub fn rows(&self) -> usize {
        self.size.0
    }

    pub fn cols(&self) -> usize {
        self.size.1
    }

    pub fn num_states(&self) -> usize {
        self.size.0 * self.size.1
    }

    /// The action set is fixed to [`ACTION_SPACE`] and is not configurable.
    pub fn num_actions(&self) -> usize {
        ACTION_SPACE.len()
    }

    pub fn is_forbidden(&self, cell: Cell) -> bool {
        self.forbidden.contains(&cell)
    }

    /// Check the configuration for out-of-range values.
    ///
    /// Construction of an environment never calls this; it is an opt-in check
    /// for callers loading maps from untrusted sources. A target inside the
    /// forbidden set is only logged: the goal check wins in that case.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GridError::invalid_parameter(
                "size".to_string(),
                format!("rows and cols must be at least 1, got ({}, {})", rows, cols),
            ));
        }

        for (name, cell) in [("start", self.start), ("target", self.target)] {
            if !cell.in_bounds(self.size) {
                return Err(GridError::invalid_parameter(
                    name.to_string(),
                    format!("{} lies outside a {}x{} grid", cell, rows, cols),
                ));
            }
        }

        if let Some(cell) = self.forbidden.iter().find(|c| !c.in_bounds(self.size)) {
            return Err(GridError::invalid_parameter(
                "forbidden".to_string(),
                format!("{} lies outside a {}x{} grid", cell, rows, cols),
            ));
        }

        if self.is_forbidden(self.target) {
            warn!(target_cell = %self.target, "target lies inside the forbidden set; goal check takes precedence");
        }
        if self.is_forbidden(self.start) {
            warn!(start = %self.start, "start lies inside the forbidden set");
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file; missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
