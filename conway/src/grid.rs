// grid.rs - Toroidal grid and generation transition for Conway's Game of Life

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Fixed playing area used by the desktop app
pub const GRID_WIDTH: usize = 40;
pub const GRID_HEIGHT: usize = 30;

/// Probability of a cell starting alive when the grid is randomized
pub const INITIAL_DENSITY: f64 = 0.4;

/// Largest board any constructor accepts
pub const MAX_CELLS: usize = 1 << 24;

/// `width * height`, refusing empty, overflowing or oversized boards
pub fn checked_cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroDimension { width, height });
    }
    match width.checked_mul(height) {
        Some(count) if count <= MAX_CELLS => Ok(count),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

/// A toroidal grid of live/dead cells, stored row-major.
///
/// The only ways to change a grid in place are [`Grid::toggle`], [`Grid::set`]
/// and [`Grid::advance`]. Everything else reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

// On-disk shape; goes through `Grid::from_cells` so the length invariant holds
#[derive(Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        Grid::from_cells(repr.width, repr.height, repr.cells)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cells: vec![false; GRID_WIDTH * GRID_HEIGHT],
        }
    }
}

impl Grid {
    /// All-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let count = checked_cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; count],
        })
    }

    /// Each cell independently alive with probability `density` (clamped to 0..=1)
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        let density = density.clamp(0.0, 1.0);
        for cell in grid.cells.iter_mut() {
            *cell = rng.random_bool(density);
        }
        Ok(grid)
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = checked_cell_count(width, height)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell state, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = alive;
        }
    }

    /// Flip one cell. Returns `false` (and changes nothing) when out of bounds.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row by row
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Live cells among the 8 neighbors, wrapping at every edge
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width, self.height);
        let (x, y) = (x % w, y % h);
        let cols = [(x + w - 1) % w, x, (x + 1) % w];
        let rows = [(y + h - 1) % h, y, (y + 1) % h];

        let mut count = 0;
        for (ri, &ny) in rows.iter().enumerate() {
            for (ci, &nx) in cols.iter().enumerate() {
                if ri == 1 && ci == 1 {
                    continue; // the cell itself
                }
                if self.cells[ny * w + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    /// The next generation, computed from this snapshot into a fresh buffer
    pub fn next_generation(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[y * self.width + x];
                let next_state = match (alive, self.live_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3)            => true, // Birth
                    _                     => false, // Death or stays dead
                };
                cells.push(next_state);
            }
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Replace this grid with its next generation
    pub fn advance(&mut self) {
        *self = self.next_generation();
    }
}
