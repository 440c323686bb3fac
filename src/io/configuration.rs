//! Game constants and runtime configuration defaults

// Board shape of the classic game
/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 4;
/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_GRID_DIMENSION: usize = 64;

/// Tile value that wins the game when present anywhere on the board
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed before the first move
pub const INITIAL_TILES: usize = 2;

/// Value of a freshly spawned tile in the common case
pub const SPAWN_LOW_VALUE: u32 = 2;
/// Value of a freshly spawned tile in the rare case
pub const SPAWN_HIGH_VALUE: u32 = 4;
/// Probability that a spawned tile takes the high value
pub const SPAWN_HIGH_PROBABILITY: f64 = 0.1;

// Default values for configurable parameters
/// Fixed seed for reproducible games
pub const DEFAULT_SEED: u64 = 42;

/// Default number of games played by a simulation batch
pub const DEFAULT_GAMES: usize = 100;

/// Default cap on move attempts per simulated game
pub const DEFAULT_MAX_MOVES: usize = 10_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Rendering settings
/// Minimum rendered cell width in characters
pub const MIN_CELL_WIDTH: usize = 4;
