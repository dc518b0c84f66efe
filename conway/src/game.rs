// game.rs - Game state shared between the event loop and the renderer

use std::path::PathBuf;
use std::time::Instant;

use crate::clock::TickClock;
use crate::config::LifeConfig;
use crate::error::{GridError, PersistenceError};
use crate::grid::Grid;
use crate::persistence;

/// Operations the UI drives. Reading goes through the accessors on [`GameOfLife`].
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn toggle_cell(&mut self, x: usize, y: usize) -> bool;
    fn toggle_pause(&mut self) -> bool;
    /// Advance if the tick interval has passed; returns whether it did
    fn tick(&mut self, now: Instant) -> bool;
    fn save_grid(&self) -> Result<(), PersistenceError>;
    /// `Ok(false)` when there was no save file to load
    fn load_grid(&mut self) -> Result<bool, PersistenceError>;
}

pub struct GameOfLife {
    grid: Grid,
    clock: TickClock,
    generation: u64,
    save_path: PathBuf,
}

impl GameOfLife {
    /// Random start grid at the configured density
    pub fn new(config: &LifeConfig, now: Instant) -> Result<Self, GridError> {
        let mut rng = rand::rng();
        let grid = Grid::random(
            config.width_cells,
            config.height_cells,
            config.initial_density,
            &mut rng,
        )?;
        Ok(Self::with_grid(grid, config, now))
    }

    pub fn with_grid(grid: Grid, config: &LifeConfig, now: Instant) -> Self {
        Self {
            grid,
            clock: TickClock::new(config.tick_interval(), now),
            generation: 0,
            save_path: config.save_path.clone(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn save_path(&self) -> &std::path::Path {
        &self.save_path
    }
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        self.grid.advance();
        self.generation += 1;
        log::trace!("generation {} ({} live)", self.generation, self.grid.live_count());
    }

    fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        let toggled = self.grid.toggle(x, y);
        if !toggled {
            log::debug!("ignoring toggle outside the grid at ({x}, {y})");
        }
        toggled
    }

    fn toggle_pause(&mut self) -> bool {
        let paused = self.clock.toggle_pause();
        log::info!("{}", if paused { "Paused" } else { "Resumed" });
        paused
    }

    fn tick(&mut self, now: Instant) -> bool {
        if self.clock.should_tick(now) {
            self.update_generation();
            return true;
        }
        false
    }

    fn save_grid(&self) -> Result<(), PersistenceError> {
        persistence::save_grid(&self.save_path, &self.grid)
    }

    fn load_grid(&mut self) -> Result<bool, PersistenceError> {
        let Some(grid) = persistence::load_grid(&self.save_path)? else {
            return Ok(false);
        };
        if grid.dimensions() != self.grid.dimensions() {
            return Err(PersistenceError::DimensionMismatch {
                expected: self.grid.dimensions(),
                actual: grid.dimensions(),
            });
        }
        self.grid = grid;
        self.generation = 0;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::tests::TempSave;
    use std::time::Duration;

    fn config_with_save(file: &TempSave) -> LifeConfig {
        LifeConfig {
            save_path: file.0.clone(),
            ..LifeConfig::default()
        }
    }

    fn blinker() -> Grid {
        let mut grid = Grid::new(40, 30).unwrap();
        for x in 1..4 {
            grid.set(x, 2, true);
        }
        grid
    }

    #[test]
    fn starts_random_with_configured_size() {
        let config = LifeConfig::default();
        let game = GameOfLife::new(&config, Instant::now()).unwrap();
        assert_eq!(game.grid().dimensions(), (40, 30));
        assert_eq!(game.generation(), 0);
        assert!(!game.is_paused());
    }

    #[test]
    fn unusable_board_size_is_an_error() {
        let config = LifeConfig {
            width_cells: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(
            GameOfLife::new(&config, Instant::now()),
            Err(GridError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn tick_advances_once_per_interval() {
        let start = Instant::now();
        let mut game = GameOfLife::with_grid(blinker(), &LifeConfig::default(), start);

        assert!(!game.tick(start + Duration::from_millis(1000)));
        assert!(game.tick(start + Duration::from_millis(1001)));
        assert_eq!(game.generation(), 1);
        assert!(game.grid().is_alive(2, 1) && game.grid().is_alive(2, 3));

        game.toggle_pause();
        assert!(!game.tick(start + Duration::from_secs(60)));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn manual_step_ignores_pause() {
        let mut game = GameOfLife::with_grid(blinker(), &LifeConfig::default(), Instant::now());
        assert!(game.toggle_pause());
        game.update_generation();
        assert_eq!(game.generation(), 1);
        assert_eq!(game.grid().live_count(), 3);
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut game = GameOfLife::with_grid(blinker(), &LifeConfig::default(), Instant::now());
        let before = game.grid().clone();
        assert!(game.toggle_cell(5, 5));
        assert!(game.grid().is_alive(5, 5));
        assert!(game.toggle_cell(5, 5));
        assert_eq!(game.grid(), &before);
        assert!(!game.toggle_cell(40, 5));
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn save_then_load_restores_grid() {
        let file = TempSave::new("game-roundtrip");
        let config = config_with_save(&file);
        let mut game = GameOfLife::with_grid(blinker(), &config, Instant::now());
        let saved = game.grid().clone();

        game.save_grid().unwrap();
        game.update_generation();
        assert_ne!(game.grid(), &saved);

        assert!(game.load_grid().unwrap());
        assert_eq!(game.grid(), &saved);
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn load_without_save_file_changes_nothing() {
        let file = TempSave::new("game-missing");
        let mut game = GameOfLife::new(&config_with_save(&file), Instant::now()).unwrap();
        let before = game.grid().clone();
        assert!(!game.load_grid().unwrap());
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn load_rejects_other_dimensions() {
        let file = TempSave::new("game-mismatch");
        persistence::save_grid(&file.0, &Grid::new(10, 10).unwrap()).unwrap();

        let mut game = GameOfLife::with_grid(blinker(), &config_with_save(&file), Instant::now());
        let err = game.load_grid().unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::DimensionMismatch { expected: (40, 30), actual: (10, 10) }
        ));
        assert_eq!(game.grid(), &blinker());
    }

    #[test]
    fn malformed_save_propagates() {
        let file = TempSave::new("game-malformed");
        std::fs::write(&file.0, "{").unwrap();
        let mut game = GameOfLife::with_grid(blinker(), &config_with_save(&file), Instant::now());
        assert!(matches!(game.load_grid(), Err(PersistenceError::Format { .. })));
        assert_eq!(game.grid(), &blinker());
    }
}
