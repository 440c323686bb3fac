//! Rules engine: directional moves, merging, spawning and terminal detection
//!
//! - `GridEngine` owns a board and applies moves to it.
//! - `merge` holds the single line algorithm shared by all directions.
//! - `spawn` places random tiles from an injected random source.

/// Grid engine state machine
pub mod game;
/// Line merge and compaction
pub mod merge;
/// Directions and game states
pub mod moves;
/// Random tile placement
pub mod spawn;

pub use game::{GridEngine, StepOutcome};
pub use moves::{Direction, GameState};
