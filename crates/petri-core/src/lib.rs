//! Core types for the Petri cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the binary [`CellState`], the row-major [`CellGrid`] matrix, the
//! birth/survival [`RuleSet`] with its token parser, and the core error
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod rule;

pub use cell::CellState;
pub use error::{GridError, RuleError};
pub use grid::CellGrid;
pub use rule::{RuleCounts, RuleSet};
