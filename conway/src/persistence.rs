// persistence.rs - Save/load of the grid to a single file

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::grid::Grid;

/// Default save file, relative to the working directory
pub const SAVE_FILE_NAME: &str = "savefile.json";

/// Sibling file the save is staged in before it replaces `path`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the whole grid to `path`, replacing any previous save.
///
/// The previous save is only replaced once the new one is fully on disk.
pub fn save_grid(path: &Path, grid: &Grid) -> Result<(), PersistenceError> {
    let bytes = serde_json::to_vec(grid).map_err(|source| PersistenceError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    let staging = staging_path(path);
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Err(err) = fs::write(&staging, bytes) {
        let _ = fs::remove_file(&staging);
        return Err(io_err(err));
    }
    fs::rename(&staging, path).map_err(io_err)?;
    log::info!("Saved {}x{} grid to {}", grid.width(), grid.height(), path.display());
    Ok(())
}

/// Read a grid back from `path`.
///
/// A missing file is not an error: it is logged and `Ok(None)` is returned so
/// the caller keeps its current state. Anything else that goes wrong is.
pub fn load_grid(path: &Path) -> Result<Option<Grid>, PersistenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!("File {} does not exist.", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let grid: Grid = serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {}x{} grid from {}", grid.width(), grid.height(), path.display());
    Ok(Some(grid))
}
