// config.rs - Startup constants for the simulation

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::termination::LoopCheck;

// Board geometry in pixels, the grid is derived from it
pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 10;

pub const NUM_ROWS: usize = (HEIGHT / CELL_SIZE) as usize;
pub const NUM_COLS: usize = (WIDTH / CELL_SIZE) as usize;

pub const TICK_INTERVAL_MS: u64 = 100;   // Time between generations while playing
pub const MAX_HISTORY: usize = 1000;     // Snapshots kept for scrubbing

/// Read-only settings supplied once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval_ms: u64,
    pub max_history: usize,
    pub loop_check: LoopCheck,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: NUM_ROWS,
            cols: NUM_COLS,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_history: MAX_HISTORY,
            loop_check: LoopCheck::default(),
        }
    }
}

impl Config {
    /// Parses a JSON config; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.max_history == 0 {
            return Err(EngineError::InvalidConfig(
                "max_history must be positive".into(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "tick_interval_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
