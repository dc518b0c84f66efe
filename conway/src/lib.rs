//! Conway's Game of Life on a fixed toroidal grid
//!
//! Core modules:
//! - `grid`: Cell storage and the generation transition
//! - `game`: Game state driven by the UI (tick, toggle, pause, save/load)
//! - `clock`: Tick timing gated by pause
//! - `persistence`: Save/load of the grid to a single file
//! - `layout`: Canvas geometry and click hit-testing
//! - `config`: Startup configuration

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod layout;
pub mod persistence;

pub use config::LifeConfig;
pub use error::{ConfigError, GridError, PersistenceError};
pub use game::{GameOfLife, GameOfLifeInterface};
pub use grid::Grid;
