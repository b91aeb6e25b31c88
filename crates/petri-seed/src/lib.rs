//! Seed file ingestion and emission for Petri grids.
//!
//! A seed is a plain-text description of a grid's initial configuration.
//! Two formats exist, selected by the first line:
//!
//! - `#version=1.0` — one `ROW COL` pair per line, each setting that
//!   cell alive.
//! - `#version=2.0` — one `MARKER TYPE: ARGS` instruction per line,
//!   where `MARKER` is `(o)` (alive) or `(x)` (dead) and `TYPE` is
//!   `cell`, `rectangle`, or `ellipse`.
//!
//! [`load`] parses a source into a [`SeedPlan`]; [`rasterise`] turns the
//! plan's instructions into a [`CellGrid`](petri_core::CellGrid) with
//! all-or-nothing semantics; [`write_seed`] emits the canonical v2.0
//! form of a grid's living cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod instruction;
pub mod reader;
pub mod writer;

pub use error::SeedError;
pub use instruction::{rasterise, Bounds, SeedInstruction, Shape};
pub use reader::{load, parse_seed, SeedPlan};
pub use writer::{seed_string, write_seed};
