//! The row-major cell matrix.

use crate::cell::CellState;
use crate::error::GridError;

/// A fixed-size `rows × cols` matrix of [`CellState`].
///
/// Coordinates are `(row, col)` with valid range `[0, rows) × [0, cols)`,
/// stored row-major. Dimensions never change after construction.
/// Structural equality (`==`) compares dimensions and every cell — this
/// is the equality the steady-state detector relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    rows: u32,
    cols: u32,
    cells: Vec<CellState>,
}

impl CellGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-[`Dead`](CellState::Dead) grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; (rows as usize) * (cols as usize)],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check a coordinate and return its flat row-major index.
    fn index(&self, row: i32, col: i32) -> Result<usize, GridError> {
        if row < 0 || row >= self.rows as i32 || col < 0 || col >= self.cols as i32 {
            return Err(GridError::CoordOutOfBounds {
                row,
                col,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            });
        }
        Ok((row as usize) * (self.cols as usize) + col as usize)
    }

    /// Read the state of a cell.
    ///
    /// An out-of-range coordinate is an error, never silently clamped.
    pub fn get(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Write the state of a cell.
    pub fn set(&mut self, row: i32, col: i32, state: CellState) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = state;
        Ok(())
    }

    /// State of a cell whose coordinate is already known to be in range
    /// (e.g. produced by axis resolution).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn state(&self, row: i32, col: i32) -> CellState {
        self.cells[(row as usize) * (self.cols as usize) + col as usize]
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Iterate over the `(row, col)` coordinates of living cells in
    /// row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(move |(i, _)| ((i / cols) as i32, (i % cols) as i32))
    }

    /// Number of living cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Build a new grid of the same dimensions by applying `f` to every
    /// cell of this one.
    ///
    /// The source grid is immutable throughout, so `f` may read any cell
    /// of the prior state while the new matrix is assembled — the basis
    /// of the double-buffered generation transition.
    pub fn map_cells(&self, mut f: impl FnMut(i32, i32, CellState) -> CellState) -> CellGrid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                cells.push(f(row, col, self.state(row, col)));
            }
        }
        CellGrid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}
