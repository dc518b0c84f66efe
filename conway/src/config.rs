// config.rs - Startup configuration (grid size, window, timing, save path)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::TICK_INTERVAL;
use crate::error::ConfigError;
use crate::grid::{GRID_HEIGHT, GRID_WIDTH, INITIAL_DENSITY, checked_cell_count};
use crate::persistence::SAVE_FILE_NAME;

/// Optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "conway.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width_cells: usize,
    pub height_cells: usize,
    /// Canvas size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
    pub tick_interval_ms: u64,
    pub initial_density: f64,
    pub save_path: PathBuf,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width_cells: GRID_WIDTH,
            height_cells: GRID_HEIGHT,
            window_width: 800.0,
            window_height: 600.0,
            tick_interval_ms: TICK_INTERVAL.as_millis() as u64,
            initial_density: INITIAL_DENSITY,
            save_path: PathBuf::from(SAVE_FILE_NAME),
        }
    }
}

impl LifeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Whole pixels per cell, like the integer division the layout relies on
    pub fn cell_width(&self) -> f32 {
        (self.window_width / self.width_cells as f32).floor()
    }

    pub fn cell_height(&self) -> f32 {
        (self.window_height / self.height_cells as f32).floor()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.width_cells == 0 || self.height_cells == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width_cells,
                height: self.height_cells,
            });
        }
        checked_cell_count(self.width_cells, self.height_cells)?;
        // Negated so a NaN window size is rejected too
        if !(self.cell_width() >= 1.0 && self.cell_height() >= 1.0) {
            return Err(ConfigError::WindowTooSmall {
                window_width: self.window_width,
                window_height: self.window_height,
                width: self.width_cells,
                height: self.height_cells,
            });
        }
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(ConfigError::BadDensity(self.initial_density));
        }
        Ok(self)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: LifeConfig = serde_json::from_str(&text)?;
        config.validate()
    }

    /// Config from `path` if present and valid, defaults otherwise
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No {} found, using default configuration", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from: {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
