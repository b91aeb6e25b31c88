//! Benchmark profiles for the Petri automaton engine.
//!
//! Provides pre-built [`WorldConfig`] profiles at the size extremes the
//! surrounding CLI supports, so benches and examples agree on what a
//! "large" world is.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use petri_engine::WorldConfig;
use petri_space::{EdgeBehavior, Neighbourhood, NeighbourhoodKind};

/// The largest grid the surrounding configuration convention allows.
pub const MAX_SIZE: u32 = 48;

/// A 48x48 Conway world on a torus, randomised from `seed`.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        rows: MAX_SIZE,
        cols: MAX_SIZE,
        edge: EdgeBehavior::Wrap,
        seed,
        ..WorldConfig::default()
    }
}

/// The reference profile with a wide-order von Neumann neighbourhood,
/// stressing the offset loop rather than the rule table.
pub fn wide_neighbourhood_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        neighbourhood: Neighbourhood::new(NeighbourhoodKind::VonNeumann, 3, false)
            .expect("order 3 is valid"),
        ..reference_profile(seed)
    }
}
