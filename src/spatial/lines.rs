//! Row and column selections used as the unit of a move

use crate::spatial::grid::{Cell, Grid};

/// Ordered run of cells taken from one row or one column
///
/// Index 0 is the edge tiles travel toward. Natural order runs left to right
/// (rows) or top to bottom (columns); a reversed line runs the other way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// Cells of `row`, column ascending
    pub fn row(row: usize, width: usize) -> Self {
        Self {
            cells: (0..width).map(|col| Cell::new(row, col)).collect(),
        }
    }

    /// Cells of `col`, row ascending
    pub fn column(col: usize, height: usize) -> Self {
        Self {
            cells: (0..height).map(|row| Cell::new(row, col)).collect(),
        }
    }

    /// The same cells in the opposite order
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.cells.reverse();
        self
    }

    /// Cells in line order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read the line's values from `grid`, off-board cells reading as empty
    pub fn values(&self, grid: &Grid) -> Vec<u32> {
        self.cells
            .iter()
            .map(|&cell| grid.get(cell).unwrap_or(0))
            .collect()
    }

    /// Write `values` back along the line
    pub(crate) fn write_values(&self, grid: &mut Grid, values: &[u32]) {
        for (&cell, &value) in self.cells.iter().zip(values) {
            grid.set(cell, value);
        }
    }
}
