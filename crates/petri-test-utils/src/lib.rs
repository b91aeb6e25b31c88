//! Test fixtures for Petri development.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{blinker, block, glider};
