//! Error types for seed parsing and rasterisation.

use petri_core::GridError;
use std::fmt;
use std::io;

/// Errors from seed ingestion.
///
/// All of these are recoverable from the caller's perspective: the
/// documented policy is to abandon the seed entirely and fall back to a
/// random fill of the whole grid, surfacing the error as a warning.
#[derive(Debug)]
pub enum SeedError {
    /// The first line is not a recognised `#version=` selector.
    UnknownVersion {
        /// The offending line.
        line: String,
    },
    /// A seed line cannot be parsed into an instruction.
    Malformed {
        /// 1-based line number within the document.
        line_no: usize,
        /// What went wrong.
        reason: String,
    },
    /// An instruction produced a coordinate outside the grid.
    OutOfBounds {
        /// Row of the offending coordinate.
        row: i32,
        /// Column of the offending coordinate.
        col: i32,
    },
    /// Grid construction failed during rasterisation.
    Grid(GridError),
    /// An I/O error from the underlying reader.
    Io(io::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVersion { line } => {
                write!(f, "unrecognised seed version line: '{line}'")
            }
            Self::Malformed { line_no, reason } => {
                write!(f, "seed line {line_no}: {reason}")
            }
            Self::OutOfBounds { row, col } => {
                write!(f, "seed cell ({row}, {col}) is outside the grid")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Io(e) => write!(f, "seed read failed: {e}"),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SeedError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<io::Error> for SeedError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
