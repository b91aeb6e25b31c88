//! Error types for grid access and rule parsing.

use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// Row of the offending access.
        row: i32,
        /// Column of the offending access.
        col: i32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A dimension exceeds the maximum (coordinates use `i32`).
    DimensionTooLarge {
        /// Which dimension overflowed (`"rows"` or `"cols"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { row, col, bounds } => {
                write!(f, "cell ({row}, {col}) out of bounds: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors from parsing birth/survival rule tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A token is neither an integer nor the `...` range separator.
    MalformedCount {
        /// The offending token.
        token: String,
    },
    /// A `...` range separator is missing an integer bound on either side.
    DanglingRange,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCount { token } => {
                write!(f, "rule token '{token}' is not a neighbour count")
            }
            Self::DanglingRange => {
                write!(f, "'...' range separator needs an integer on both sides")
            }
        }
    }
}

impl std::error::Error for RuleError {}
