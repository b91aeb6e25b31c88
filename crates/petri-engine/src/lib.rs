//! Simulation engine for the Petri cellular automaton.
//!
//! A [`World`] owns the current generation's [`CellGrid`](petri_core::CellGrid)
//! and everything needed to advance it: the neighbourhood counting
//! strategy, the birth/survival rules, a deterministic RNG for random
//! fills, and a bounded [`SnapshotMemory`] of past generations used for
//! steady-state detection and ghost-trail rendering.
//!
//! The engine is single-threaded and synchronous: each generation is
//! fully computed from the immutable previous snapshot before it is
//! swapped in, and the caller's render/pacing logic runs strictly
//! between [`World::step`] calls. The engine performs no I/O — display
//! goes through the caller-implemented [`RenderSink`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod memory;
pub mod render;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use memory::SnapshotMemory;
pub use render::{Intensity, RenderSink, GHOST_GENERATIONS};
pub use world::{next_generation, Steadiness, Step, World};
