//! Random tile placement

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::io::configuration::{SPAWN_HIGH_PROBABILITY, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};
use crate::io::error::{EngineError, Result};
use crate::spatial::{Cell, Grid};

/// Value for a new tile: 4 with probability 0.1, otherwise 2
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.random_bool(SPAWN_HIGH_PROBABILITY) {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Place a new tile on a uniformly chosen empty cell
///
/// The cell is drawn before the value, both from `rng`.
///
/// # Errors
///
/// Returns `BoardFull` if the grid has no empty cell
pub fn spawn_random_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<Cell> {
    let free = grid.free_cells();
    let &cell = free.choose(rng).ok_or_else(|| EngineError::BoardFull {
        width: grid.width(),
        height: grid.height(),
    })?;
    let value = random_tile_value(rng);
    grid.set(cell, value);
    Ok(cell)
}
