//! Rectangular tile grid with bounds-checked cell access and full-board scans
//!
//! The grid stores tile magnitudes in row-major `ndarray` storage. Every cell
//! holds either `0` (empty) or a power of two; constructors reject anything
//! else so the engine can rely on the invariant without re-checking.

use ndarray::{Array2, ArrayView2};

use crate::io::error::{EngineError, Result, invalid_parameter};

/// Zero-indexed cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl Cell {
    /// Create a cell coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    const fn index(self) -> [usize; 2] {
        [self.row, self.col]
    }
}

/// Tile values of a board, `0` marking an empty cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u32>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: Array2::zeros((height, width)),
        })
    }

    /// Build a grid from row-major values
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows differ in length or are
    /// empty, or a value is neither `0` nor a power of two
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let mut values = Vec::with_capacity(width * height);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(invalid_parameter(
                    "rows",
                    &format!("row {row_index} has {} cells", row.len()),
                    &format!("every row must have {width} cells"),
                ));
            }
            for (col, &value) in row.iter().enumerate() {
                if value != 0 && !value.is_power_of_two() {
                    return Err(EngineError::InvalidTile {
                        row: row_index,
                        col,
                        value,
                    });
                }
            }
            values.extend_from_slice(row);
        }

        let cells = Array2::from_shape_vec((height, width), values).map_err(|error| {
            invalid_parameter("rows", &format!("{width}x{height}"), &error)
        })?;
        Ok(Self { cells })
    }

    /// Copy the grid out as row-major nested vectors
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Read-only view of the underlying storage, indexed `[row, col]`
    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    /// Value at `cell`, or `None` when the coordinate is off the board
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.cells.get(cell.index()).copied()
    }

    /// Overwrite the value at `cell`, returning false when off the board
    ///
    /// Only the engine writes cells, which keeps the power-of-two invariant.
    pub(crate) fn set(&mut self, cell: Cell, value: u32) -> bool {
        self.cells.get_mut(cell.index()).is_some_and(|slot| {
            *slot = value;
            true
        })
    }

    /// Empty cells in row-major order
    pub fn free_cells(&self) -> Vec<Cell> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|((row, col), _)| Cell::new(row, col))
            .collect()
    }

    /// Whether any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().any(|&cell| cell == value)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Largest tile on the board, `0` for an empty board
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether any horizontally or vertically adjacent pair holds equal values
    ///
    /// Two adjacent empty cells count as an equal pair. Lose detection only
    /// consults this once the board is full, where no empty pair can exist.
    pub fn has_equal_neighbours(&self) -> bool {
        self.cells
            .windows((1, 2))
            .into_iter()
            .chain(self.cells.windows((2, 1)))
            .any(pair_is_equal)
    }
}

fn pair_is_equal(window: ArrayView2<'_, u32>) -> bool {
    let mut values = window.iter();
    matches!((values.next(), values.next()), (Some(a), Some(b)) if a == b)
}
