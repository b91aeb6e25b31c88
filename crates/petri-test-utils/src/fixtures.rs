//! Canonical Game of Life patterns on small grids.
//!
//! Three standard fixtures for engine and seed testing:
//!
//! - [`blinker`] — period-2 oscillator, the smallest non-trivial cycle.
//! - [`block`] — 2x2 still life, the smallest fixed point.
//! - [`glider`] — the classic diagonally translating spaceship.

use petri_core::{CellGrid, CellState};

/// Build a grid with the given cells alive.
///
/// # Panics
///
/// Panics if a coordinate is outside the grid; fixtures are static data,
/// so that is a bug in the fixture itself.
fn pattern(rows: u32, cols: u32, live: &[(i32, i32)]) -> CellGrid {
    let mut grid = CellGrid::new(rows, cols).expect("fixture dimensions are valid");
    for &(row, col) in live {
        grid.set(row, col, CellState::Alive)
            .expect("fixture cell is in range");
    }
    grid
}

/// A horizontal blinker on a 5x5 grid: row 2, columns 1-3.
///
/// Under the Conway rule it alternates between this horizontal bar and
/// a vertical bar (column 2, rows 1-3) every generation.
pub fn blinker() -> CellGrid {
    pattern(5, 5, &[(2, 1), (2, 2), (2, 3)])
}

/// A 2x2 block on a 5x5 grid at rows 1-2, columns 1-2.
///
/// A still life: every step reproduces it exactly.
pub fn block() -> CellGrid {
    pattern(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)])
}

/// A glider on an 8x8 grid, heading toward the bottom-right corner.
pub fn glider() -> CellGrid {
    pattern(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
}
