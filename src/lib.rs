//! Rules engine for a sliding-tile merge puzzle in the style of 2048
//!
//! Each directional move merges equal tiles and compacts them toward one edge
//! of a fixed board. A random tile spawns after every move that changed the
//! board. Win and lose are derived from the grid on demand.

#![forbid(unsafe_code)]

/// Random-policy simulation and batch statistics
pub mod analysis;
/// Move application, merging, spawning and game state
pub mod engine;
/// Command-line host, rendering, configuration and error handling
pub mod io;
/// Grid storage and line selection
pub mod spatial;

pub use engine::{Direction, GameState, GridEngine, StepOutcome};
pub use io::error::{EngineError, Result};
pub use spatial::{Cell, Grid};
