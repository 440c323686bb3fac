//! Grid engine: owns the board and its random source, applies moves

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::merge::shift_grid;
use crate::engine::moves::{Direction, GameState};
use crate::engine::spawn;
use crate::io::configuration::{INITIAL_TILES, WIN_TILE};
use crate::io::error::Result;
use crate::spatial::{Cell, Grid};

/// Result of a single `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether any tile merged or slid
    pub moved: bool,
    /// Cell that received a new tile, if one spawned
    pub spawned: Option<Cell>,
    /// Game state after the step
    pub state: GameState,
}

/// Rules engine for one board
///
/// All derived state is recomputed from the grid on each query. The random
/// source is the only nondeterminism; inject a seeded generator for
/// reproducible games.
#[derive(Debug, Clone)]
pub struct GridEngine<R = StdRng> {
    grid: Grid,
    rng: R,
}

impl GridEngine<StdRng> {
    /// Start a game driven by a seeded `StdRng`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::new(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridEngine<R> {
    /// Start a game on an empty board with the initial random tiles placed
    ///
    /// Boards with a single cell receive one starting tile.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self> {
        let mut engine = Self::from_grid(Grid::empty(width, height)?, rng);
        for _ in 0..INITIAL_TILES.min(width * height) {
            engine.spawn_random_tile()?;
        }
        Ok(engine)
    }

    /// Wrap an existing grid without placing starting tiles
    pub const fn from_grid(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    /// Board width in cells
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Board height in cells
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Current board
    pub const fn state(&self) -> &Grid {
        &self.grid
    }

    /// Replace the board wholesale
    pub fn load_state(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Mutable access to the random source
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Whether any adjacent pair holds equal values (empty pairs included)
    pub fn has_merge_available(&self) -> bool {
        self.grid.has_equal_neighbours()
    }

    /// Derive the game state from the board
    pub fn current_game_state(&self) -> GameState {
        if self.grid.contains(WIN_TILE) {
            return GameState::Win;
        }
        if self.grid.free_cells().is_empty() && !self.has_merge_available() {
            return GameState::Lose;
        }
        GameState::Playing
    }

    /// Apply a move and spawn a tile if the board changed
    ///
    /// Finished games ignore moves. A blocked move leaves the board untouched
    /// and spawns nothing.
    ///
    /// # Errors
    ///
    /// Returns `BoardFull` if a spawn is attempted without a free cell, which
    /// a changing move always leaves
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome> {
        let state = self.current_game_state();
        if state.is_terminal() {
            return Ok(StepOutcome {
                moved: false,
                spawned: None,
                state,
            });
        }

        let moved = self.shift(direction);
        let mut after = self.current_game_state();
        let mut spawned = None;
        if moved && after == GameState::Playing {
            spawned = Some(self.spawn_random_tile()?);
            after = self.current_game_state();
        }

        Ok(StepOutcome {
            moved,
            spawned,
            state: after,
        })
    }

    /// Slide and merge toward `direction` without spawning
    pub fn shift(&mut self, direction: Direction) -> bool {
        shift_grid(&mut self.grid, direction)
    }

    /// Place a 2 or 4 on a random empty cell
    ///
    /// # Errors
    ///
    /// Returns `BoardFull` if no cell is empty
    pub fn spawn_random_tile(&mut self) -> Result<Cell> {
        spawn::spawn_random_tile(&mut self.grid, &mut self.rng)
    }
}
