//! Error types for neighbourhood construction.

use std::fmt;

/// Errors arising from neighbourhood construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Neighbourhood order must be at least 1.
    ZeroOrder,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroOrder => write!(f, "neighbourhood order must be >= 1"),
        }
    }
}

impl std::error::Error for SpaceError {}
