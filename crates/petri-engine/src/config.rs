//! World configuration and validation.
//!
//! [`WorldConfig`] is a plain, already-validated value object: flag
//! parsing and range policy (the surrounding CLI's size conventions)
//! belong to the caller; [`validate()`](WorldConfig::validate) checks
//! only structural soundness before a world is built.

use std::error::Error;
use std::fmt;

use petri_core::{CellGrid, GridError, RuleSet};
use petri_space::{EdgeBehavior, Neighbourhood};

/// Errors detected during [`WorldConfig::validate()`] or world setup.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid construction failed.
    Grid(GridError),
    /// Snapshot memory capacity is zero.
    MemoryCapacityZero,
    /// `random_factor` is NaN, infinite, or outside `[0, 1]`.
    InvalidRandomFactor {
        /// The invalid value.
        value: f64,
    },
    /// An installed grid's dimensions do not match the world's.
    GridSizeMismatch {
        /// The world's `(rows, cols)`.
        expected: (u32, u32),
        /// The installed grid's `(rows, cols)`.
        found: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::MemoryCapacityZero => {
                write!(f, "memory_capacity must be at least 1")
            }
            Self::InvalidRandomFactor { value } => {
                write!(f, "random_factor must be in [0.0, 1.0], got {value}")
            }
            Self::GridSizeMismatch { expected, found } => {
                write!(
                    f,
                    "grid is {}x{} but the world is {}x{}",
                    found.0, found.1, expected.0, expected.1,
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Complete configuration for constructing a simulation [`World`](crate::World).
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Grid height (number of rows).
    pub rows: u32,
    /// Grid width (number of columns).
    pub cols: u32,
    /// Boundary behavior at the grid edges.
    pub edge: EdgeBehavior,
    /// Living-neighbour counting strategy.
    pub neighbourhood: Neighbourhood,
    /// Birth/survival rule.
    pub rules: RuleSet,
    /// Probability that a cell starts alive under a random fill.
    pub random_factor: f64,
    /// Number of past generations retained for steady-state detection
    /// and ghost-trail rendering.
    pub memory_capacity: usize,
    /// Generations the driving loop intends to run. Informational — the
    /// engine itself never stops stepping.
    pub max_generations: u64,
    /// RNG seed for deterministic random fills.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            edge: EdgeBehavior::Absorb,
            neighbourhood: Neighbourhood::moore(),
            rules: RuleSet::conway(),
            random_factor: 0.5,
            memory_capacity: 16,
            max_generations: 50,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. The grid must be constructible.
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        if self.rows > CellGrid::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "rows",
                value: self.rows,
                max: CellGrid::MAX_DIM,
            }));
        }
        if self.cols > CellGrid::MAX_DIM {
            return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "cols",
                value: self.cols,
                max: CellGrid::MAX_DIM,
            }));
        }
        // 2. At least one snapshot must be retainable, or steady-state
        //    detection degenerates.
        if self.memory_capacity == 0 {
            return Err(ConfigError::MemoryCapacityZero);
        }
        // 3. random_factor is a probability.
        if !self.random_factor.is_finite() || !(0.0..=1.0).contains(&self.random_factor) {
            return Err(ConfigError::InvalidRandomFactor {
                value: self.random_factor,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_dimension_fails() {
        let cfg = WorldConfig {
            rows: 0,
            ..WorldConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::EmptyGrid)));
    }

    #[test]
    fn validate_oversized_dimension_fails() {
        let cfg = WorldConfig {
            cols: i32::MAX as u32 + 1,
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::DimensionTooLarge {
                name: "cols",
                ..
            }))
        ));
    }

    #[test]
    fn validate_zero_memory_fails() {
        let cfg = WorldConfig {
            memory_capacity: 0,
            ..WorldConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::MemoryCapacityZero));
    }

    #[test]
    fn validate_random_factor_bounds() {
        for value in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let cfg = WorldConfig {
                random_factor: value,
                ..WorldConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidRandomFactor { .. })),
                "random_factor {value} should be rejected",
            );
        }
        for value in [0.0, 0.5, 1.0] {
            let cfg = WorldConfig {
                random_factor: value,
                ..WorldConfig::default()
            };
            assert!(cfg.validate().is_ok());
        }
    }
}
