//! Moore and von Neumann neighbourhood counting.

use crate::edge::{resolve_axis, EdgeBehavior};
use crate::error::SpaceError;
use petri_core::CellGrid;
use smallvec::SmallVec;

/// The shape of a cell's neighbourhood.
///
/// A closed set of variants dispatched through a single counting
/// routine — the kind only changes the offset inclusion predicate, so
/// the per-cell loop carries no dynamic dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourhoodKind {
    /// All cells within Chebyshev distance `order` (a square block).
    Moore,
    /// All cells within Manhattan distance `order` (a diamond).
    VonNeumann,
}

/// A living-neighbour counting strategy: kind, order (radius), and
/// whether the centre cell counts toward its own total.
///
/// # Examples
///
/// ```
/// use petri_core::{CellGrid, CellState};
/// use petri_space::{EdgeBehavior, Neighbourhood};
///
/// let mut grid = CellGrid::new(3, 3).unwrap();
/// grid.set(0, 1, CellState::Alive).unwrap();
/// grid.set(1, 0, CellState::Alive).unwrap();
///
/// let moore = Neighbourhood::moore();
/// assert_eq!(moore.live_neighbours(&grid, 1, 1, EdgeBehavior::Absorb), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbourhood {
    kind: NeighbourhoodKind,
    order: u32,
    include_centre: bool,
}

impl Neighbourhood {
    /// Create a neighbourhood of the given kind and order.
    ///
    /// Returns `Err(SpaceError::ZeroOrder)` if `order` is 0.
    pub fn new(
        kind: NeighbourhoodKind,
        order: u32,
        include_centre: bool,
    ) -> Result<Self, SpaceError> {
        if order == 0 {
            return Err(SpaceError::ZeroOrder);
        }
        Ok(Self {
            kind,
            order,
            include_centre,
        })
    }

    /// The classic order-1 Moore neighbourhood, centre excluded.
    pub fn moore() -> Self {
        Self {
            kind: NeighbourhoodKind::Moore,
            order: 1,
            include_centre: false,
        }
    }

    /// The order-1 von Neumann neighbourhood, centre excluded.
    pub fn von_neumann() -> Self {
        Self {
            kind: NeighbourhoodKind::VonNeumann,
            order: 1,
            include_centre: false,
        }
    }

    /// The neighbourhood kind.
    pub fn kind(&self) -> NeighbourhoodKind {
        self.kind
    }

    /// The neighbourhood order (radius).
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Whether the centre cell counts toward its own total.
    pub fn include_centre(&self) -> bool {
        self.include_centre
    }

    /// Whether the offset pair `(dr, dc)` belongs to this neighbourhood.
    fn includes(&self, dr: i32, dc: i32) -> bool {
        if dr == 0 && dc == 0 && !self.include_centre {
            return false;
        }
        match self.kind {
            NeighbourhoodKind::Moore => true,
            NeighbourhoodKind::VonNeumann => dr.unsigned_abs() + dc.unsigned_abs() <= self.order,
        }
    }

    /// All included `(dr, dc)` offset pairs, row-major.
    pub fn offsets(&self) -> SmallVec<[(i32, i32); 8]> {
        let order = self.order as i32;
        let mut out = SmallVec::new();
        for dr in -order..=order {
            for dc in -order..=order {
                if self.includes(dr, dc) {
                    out.push((dr, dc));
                }
            }
        }
        out
    }

    /// Number of cells in the neighbourhood.
    pub fn cell_count(&self) -> usize {
        self.offsets().len()
    }

    /// Count the living neighbours of `(row, col)` in `grid`.
    ///
    /// Each offset is resolved per-axis under `edge`; an offset whose
    /// unwrapped coordinate leaves the grid is skipped entirely under
    /// [`EdgeBehavior::Absorb`] and wrapped under
    /// [`EdgeBehavior::Wrap`].
    pub fn live_neighbours(
        &self,
        grid: &CellGrid,
        row: i32,
        col: i32,
        edge: EdgeBehavior,
    ) -> u32 {
        let order = self.order as i32;
        let mut live = 0;
        for dr in -order..=order {
            let Some(nr) = resolve_axis(row + dr, grid.rows(), edge) else {
                continue;
            };
            for dc in -order..=order {
                if !self.includes(dr, dc) {
                    continue;
                }
                let Some(nc) = resolve_axis(col + dc, grid.cols(), edge) else {
                    continue;
                };
                live += grid.state(nr, nc).live_count();
            }
        }
        live
    }
}
