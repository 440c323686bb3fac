//! Spatial data structures for the tile board
//!
//! This module contains:
//! - The grid matrix and cell coordinates
//! - Row and column line selection

/// Grid storage and full-board scans
pub mod grid;
/// Line selection over rows and columns
pub mod lines;

pub use grid::{Cell, Grid};
pub use lines::Line;
