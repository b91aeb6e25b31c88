//! Seed shape instructions and rasterisation.
//!
//! Shapes are a closed variant set processed by a single dispatcher, so
//! each rasterisation rule lives next to its shape and is testable on
//! its own.

use crate::error::SeedError;
use petri_core::{CellGrid, CellState};

/// Inclusive axis-aligned bounding box from `(top, left)` to
/// `(bottom, right)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// First row of the box.
    pub top: i32,
    /// First column of the box.
    pub left: i32,
    /// Last row of the box (inclusive).
    pub bottom: i32,
    /// Last column of the box (inclusive).
    pub right: i32,
}

/// The region a seed instruction paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A single cell.
    Cell {
        /// Row of the cell.
        row: i32,
        /// Column of the cell.
        col: i32,
    },
    /// Every cell of an inclusive bounding box.
    Rectangle {
        /// The filled box.
        bounds: Bounds,
    },
    /// The cells inside the ellipse inscribed in a bounding box.
    ///
    /// A point `(row, col)` is inside iff
    /// `4·(col − x0)²/dx² + 4·(row − y0)²/dy² ≤ 1`, where `(x0, y0)` is
    /// the box centre and `dx`, `dy` are its full width and height.
    Ellipse {
        /// The ellipse's bounding box.
        bounds: Bounds,
    },
}

/// One parsed seed line: paint `shape` with `state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedInstruction {
    /// The state painted onto every covered cell.
    pub state: CellState,
    /// The covered region.
    pub shape: Shape,
}

impl SeedInstruction {
    /// Paint this instruction onto `grid`.
    ///
    /// Later instructions overwrite earlier ones where regions overlap.
    /// Any covered coordinate outside the grid fails with
    /// [`SeedError::OutOfBounds`].
    pub fn apply(&self, grid: &mut CellGrid) -> Result<(), SeedError> {
        match self.shape {
            Shape::Cell { row, col } => set_cell(grid, row, col, self.state),
            Shape::Rectangle { bounds } => {
                for row in bounds.top..=bounds.bottom {
                    for col in bounds.left..=bounds.right {
                        set_cell(grid, row, col, self.state)?;
                    }
                }
                Ok(())
            }
            Shape::Ellipse { bounds } => {
                let x0 = f64::from(bounds.left + bounds.right) / 2.0;
                let y0 = f64::from(bounds.top + bounds.bottom) / 2.0;
                let dx = f64::from((bounds.right - bounds.left).abs());
                let dy = f64::from((bounds.bottom - bounds.top).abs());
                for row in bounds.top..=bounds.bottom {
                    for col in bounds.left..=bounds.right {
                        if ellipse_contains(row, col, x0, y0, dx, dy) {
                            set_cell(grid, row, col, self.state)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// The implicit ellipse membership test, evaluated on integer grid
/// coordinates. A zero-extent axis contributes 0 on the centre line, so
/// a degenerate box rasterises as a filled segment or point instead of
/// dividing by zero.
fn ellipse_contains(row: i32, col: i32, x0: f64, y0: f64, dx: f64, dy: f64) -> bool {
    let x_term = if dx > 0.0 {
        4.0 * (f64::from(col) - x0).powi(2) / (dx * dx)
    } else {
        0.0
    };
    let y_term = if dy > 0.0 {
        4.0 * (f64::from(row) - y0).powi(2) / (dy * dy)
    } else {
        0.0
    };
    x_term + y_term <= 1.0
}

fn set_cell(grid: &mut CellGrid, row: i32, col: i32, state: CellState) -> Result<(), SeedError> {
    grid.set(row, col, state)
        .map_err(|_| SeedError::OutOfBounds { row, col })
}

/// Rasterise `instructions` in order onto a fresh all-dead grid.
///
/// All-or-nothing: any out-of-range coordinate aborts with an error and
/// no grid is produced, so a failed seed never partially applies. The
/// documented caller policy for a failure is a full random fill.
pub fn rasterise(
    instructions: &[SeedInstruction],
    rows: u32,
    cols: u32,
) -> Result<CellGrid, SeedError> {
    let mut grid = CellGrid::new(rows, cols)?;
    for instruction in instructions {
        instruction.apply(&mut grid)?;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive(shape: Shape) -> SeedInstruction {
        SeedInstruction {
            state: CellState::Alive,
            shape,
        }
    }

    fn dead(shape: Shape) -> SeedInstruction {
        SeedInstruction {
            state: CellState::Dead,
            shape,
        }
    }

    // ── Cell ────────────────────────────────────────────────────

    #[test]
    fn cell_sets_one_coordinate() {
        let grid = rasterise(&[alive(Shape::Cell { row: 2, col: 3 })], 8, 8).unwrap();
        assert_eq!(grid.live_count(), 1);
        assert!(grid.get(2, 3).unwrap().is_alive());
    }

    #[test]
    fn out_of_bounds_cell_is_an_error() {
        let result = rasterise(&[alive(Shape::Cell { row: 8, col: 0 })], 8, 8);
        assert!(matches!(
            result,
            Err(SeedError::OutOfBounds { row: 8, col: 0 })
        ));
    }

    // ── Rectangle ───────────────────────────────────────────────

    #[test]
    fn rectangle_fills_inclusive_box() {
        let bounds = Bounds {
            top: 1,
            left: 1,
            bottom: 3,
            right: 3,
        };
        let grid = rasterise(&[alive(Shape::Rectangle { bounds })], 8, 8).unwrap();
        assert_eq!(grid.live_count(), 9);
        for row in 0..8 {
            for col in 0..8 {
                let inside = (1..=3).contains(&row) && (1..=3).contains(&col);
                assert_eq!(grid.get(row, col).unwrap().is_alive(), inside);
            }
        }
    }

    #[test]
    fn later_instruction_overwrites_earlier() {
        let bounds = Bounds {
            top: 0,
            left: 0,
            bottom: 2,
            right: 2,
        };
        let grid = rasterise(
            &[
                alive(Shape::Rectangle { bounds }),
                dead(Shape::Cell { row: 1, col: 1 }),
            ],
            4,
            4,
        )
        .unwrap();
        assert_eq!(grid.live_count(), 8);
        assert!(!grid.get(1, 1).unwrap().is_alive());
    }

    #[test]
    fn partially_out_of_range_rectangle_produces_no_grid() {
        let bounds = Bounds {
            top: 2,
            left: 2,
            bottom: 5,
            right: 5,
        };
        let result = rasterise(&[alive(Shape::Rectangle { bounds })], 4, 4);
        assert!(matches!(result, Err(SeedError::OutOfBounds { .. })));
    }

    // ── Ellipse ─────────────────────────────────────────────────

    #[test]
    fn ellipse_centre_in_corners_out() {
        let bounds = Bounds {
            top: 0,
            left: 0,
            bottom: 4,
            right: 8,
        };
        let grid = rasterise(&[alive(Shape::Ellipse { bounds })], 10, 10).unwrap();
        // Box centre is (2, 4).
        assert!(grid.get(2, 4).unwrap().is_alive());
        for (row, col) in [(0, 0), (0, 8), (4, 0), (4, 8)] {
            assert!(
                !grid.get(row, col).unwrap().is_alive(),
                "corner ({row}, {col}) should be outside the ellipse",
            );
        }
    }

    #[test]
    fn ellipse_matches_implicit_equation() {
        let bounds = Bounds {
            top: 0,
            left: 0,
            bottom: 4,
            right: 8,
        };
        let grid = rasterise(&[alive(Shape::Ellipse { bounds })], 10, 10).unwrap();
        for row in 0..10 {
            for col in 0..10 {
                let in_box = (0..=4).contains(&row) && (0..=8).contains(&col);
                let inside = in_box && {
                    let x = f64::from(col) - 4.0;
                    let y = f64::from(row) - 2.0;
                    4.0 * x * x / 64.0 + 4.0 * y * y / 16.0 <= 1.0
                };
                assert_eq!(
                    grid.get(row, col).unwrap().is_alive(),
                    inside,
                    "cell ({row}, {col})",
                );
            }
        }
    }

    #[test]
    fn degenerate_ellipse_is_a_segment() {
        // A one-row box rasterises as a horizontal bar, not a panic.
        let bounds = Bounds {
            top: 2,
            left: 1,
            bottom: 2,
            right: 5,
        };
        let grid = rasterise(&[alive(Shape::Ellipse { bounds })], 6, 8).unwrap();
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn single_cell_ellipse_is_a_point() {
        let bounds = Bounds {
            top: 3,
            left: 3,
            bottom: 3,
            right: 3,
        };
        let grid = rasterise(&[alive(Shape::Ellipse { bounds })], 6, 6).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(3, 3)]);
    }
}
