// error.rs - Error types for grid construction and save/load

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid needs {expected} cells but {actual} were given")]
    CellCountMismatch { expected: usize, actual: usize },
    #[error("a {width}x{height} grid exceeds the {max} cell limit", max = crate::grid::MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("{window_width}x{window_height} window is too small for a {width}x{height} grid")]
    WindowTooSmall {
        window_width: f32,
        window_height: f32,
        width: usize,
        height: usize,
    },
    #[error("initial_density {0} is not a probability")]
    BadDensity(f64),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the save file failed
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The save file exists but does not hold a valid grid
    #[error("malformed save file {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("saved grid is {}x{} but the game expects {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
