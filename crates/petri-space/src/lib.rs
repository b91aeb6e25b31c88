//! Neighbourhood topology for Petri grids.
//!
//! This crate defines [`EdgeBehavior`] — how the lattice treats
//! coordinates that leave its bounds — and [`Neighbourhood`], the
//! Moore / von Neumann living-neighbour counting strategy with
//! configurable order (radius) and centre inclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod neighbourhood;

pub use edge::{resolve_axis, EdgeBehavior};
pub use error::SpaceError;
pub use neighbourhood::{Neighbourhood, NeighbourhoodKind};
