//! Boundary behavior for the grid edges.

/// How the grid handles neighbour coordinates that leave its bounds.
///
/// # Examples
///
/// ```
/// use petri_space::{resolve_axis, EdgeBehavior};
///
/// // Absorb: an out-of-range coordinate does not exist.
/// assert_eq!(resolve_axis(-1, 4, EdgeBehavior::Absorb), None);
///
/// // Wrap: it comes back in from the opposite side.
/// assert_eq!(resolve_axis(-1, 4, EdgeBehavior::Wrap), Some(3));
/// assert_eq!(resolve_axis(4, 4, EdgeBehavior::Wrap), Some(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbours do not exist: boundary cells simply have
    /// fewer neighbours.
    Absorb,
    /// Out-of-bounds neighbours wrap to the opposite side (torus topology).
    Wrap,
}

/// Resolve a single axis value under the given edge behavior.
///
/// The in-range test uses the *unwrapped* value: under
/// [`EdgeBehavior::Absorb`] a coordinate that left the grid is dropped
/// even though wrapping would have brought it back in range, so absorb
/// mode can never behave periodically at the boundary.
pub fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(((val % n) + n) % n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_value_passes_through() {
        for edge in [EdgeBehavior::Absorb, EdgeBehavior::Wrap] {
            assert_eq!(resolve_axis(0, 5, edge), Some(0));
            assert_eq!(resolve_axis(4, 5, edge), Some(4));
        }
    }

    #[test]
    fn absorb_drops_out_of_range() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
    }

    #[test]
    fn wrap_applies_positive_modulo() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
        assert_eq!(resolve_axis(-6, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(12, 5, EdgeBehavior::Wrap), Some(2));
    }
}
