//! Petri: a generalized two-dimensional cellular automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Petri sub-crates. For most users, adding `petri` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // A 5×5 Conway world with a horizontal blinker.
//! let config = WorldConfig {
//!     rows: 5,
//!     cols: 5,
//!     ..WorldConfig::default()
//! };
//! let mut world = World::new(config).unwrap();
//!
//! let mut start = CellGrid::new(5, 5).unwrap();
//! for col in 1..=3 {
//!     start.set(2, col, CellState::Alive).unwrap();
//! }
//! world.install(start).unwrap();
//!
//! // The blinker oscillates with period 2: the second generation
//! // reproduces the starting configuration.
//! assert_eq!(world.step().steadiness, Steadiness::Progressing);
//! assert_eq!(
//!     world.step().steadiness,
//!     Steadiness::Cycling { period: 2 },
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `petri-core` | Cell state, the grid matrix, rule sets, core errors |
//! | [`space`] | `petri-space` | Edge behavior and neighbourhood counting |
//! | [`engine`] | `petri-engine` | The world, snapshot memory, render sink |
//! | [`seed`] | `petri-seed` | Seed parsing, rasterisation, and emission |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell state, the grid matrix, rule sets, and core errors (`petri-core`).
pub use petri_core as types;

/// Edge behavior and neighbourhood counting (`petri-space`).
pub use petri_space as space;

/// The simulation world, snapshot memory, and render sink (`petri-engine`).
pub use petri_engine as engine;

/// Seed parsing, rasterisation, and emission (`petri-seed`).
pub use petri_seed as seed;

/// Common imports for typical Petri usage.
///
/// ```rust
/// use petri::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use petri_core::{CellGrid, CellState, RuleCounts, RuleSet};

    // Errors
    pub use petri_core::{GridError, RuleError};
    pub use petri_engine::ConfigError;
    pub use petri_seed::SeedError;

    // Space
    pub use petri_space::{EdgeBehavior, Neighbourhood, NeighbourhoodKind};

    // Engine
    pub use petri_engine::{
        next_generation, Intensity, RenderSink, SnapshotMemory, Steadiness, Step, World,
        WorldConfig,
    };

    // Seeds
    pub use petri_seed::{load, rasterise, write_seed, SeedInstruction, SeedPlan, Shape};
}
