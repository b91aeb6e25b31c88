//! Birth/survival rule sets and their token parser.

use crate::cell::CellState;
use crate::error::RuleError;
use indexmap::IndexSet;
use std::fmt;

/// Range separator accepted between two integer tokens (`A ... B`).
const RANGE_TOKEN: &str = "...";

/// A deduplicated set of living-neighbour counts.
///
/// Membership ([`contains`](RuleCounts::contains)) is the per-cell hot
/// path of the transition engine; iteration order is ascending so that
/// display output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleCounts {
    counts: IndexSet<u32>,
}

impl RuleCounts {
    /// Build from explicit counts (deduplicated, sorted ascending).
    pub fn from_counts(counts: impl IntoIterator<Item = u32>) -> Self {
        let mut set: IndexSet<u32> = counts.into_iter().collect();
        set.sort_unstable();
        Self { counts: set }
    }

    /// Parse rule tokens: individual integers plus inclusive `A ... B`
    /// ranges (three tokens: start, separator, end).
    ///
    /// Every integer in `[A, B]` is added once; duplicates from
    /// overlapping tokens or ranges are ignored. A reversed range
    /// (`A > B`) adds nothing. Fails with [`RuleError::MalformedCount`]
    /// for a token that is neither an integer nor the `...` separator,
    /// and with [`RuleError::DanglingRange`] when `...` lacks an integer
    /// bound on either side.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, RuleError> {
        let mut counts = IndexSet::new();
        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            if token == RANGE_TOKEN {
                let start = i
                    .checked_sub(1)
                    .map(|prev| parse_bound(tokens[prev].as_ref()))
                    .ok_or(RuleError::DanglingRange)??;
                let stop = tokens
                    .get(i + 1)
                    .map(|next| parse_bound(next.as_ref()))
                    .ok_or(RuleError::DanglingRange)??;
                for n in start..=stop {
                    counts.insert(n);
                }
            } else {
                let n = token.parse::<u32>().map_err(|_| RuleError::MalformedCount {
                    token: token.to_string(),
                })?;
                counts.insert(n);
            }
        }
        counts.sort_unstable();
        Ok(Self { counts })
    }

    /// Whether `n` is one of the counts.
    pub fn contains(&self, n: u32) -> bool {
        self.counts.contains(&n)
    }

    /// Number of distinct counts.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over the counts in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().copied()
    }
}

/// An integer bound of a `...` range; anything else dangles the range.
fn parse_bound(token: &str) -> Result<u32, RuleError> {
    if token == RANGE_TOKEN {
        return Err(RuleError::DanglingRange);
    }
    token.parse::<u32>().map_err(|_| RuleError::DanglingRange)
}

impl fmt::Display for RuleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// The birth/survival rule of an automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    /// Neighbour counts at which a living cell stays alive.
    pub survival: RuleCounts,
    /// Neighbour counts at which a dead cell comes to life.
    pub birth: RuleCounts,
}

impl RuleSet {
    /// The classic Conway rule: survival {2, 3}, birth {3}.
    pub fn conway() -> Self {
        Self {
            survival: RuleCounts::from_counts([2, 3]),
            birth: RuleCounts::from_counts([3]),
        }
    }

    /// Next state of a cell with the given living-neighbour count.
    pub fn next_state(&self, current: CellState, live_neighbours: u32) -> CellState {
        let lives = match current {
            CellState::Alive => self.survival.contains(live_neighbours),
            CellState::Dead => self.birth.contains(live_neighbours),
        };
        if lives {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_range_tokens() {
        let counts = RuleCounts::parse(&["2", "...", "3"]).unwrap();
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn parse_dedupes_repeated_tokens() {
        let counts = RuleCounts::parse(&["1", "1", "3"]).unwrap();
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn parse_sorts_ascending() {
        let counts = RuleCounts::parse(&["5", "1", "3"]).unwrap();
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn parse_overlapping_ranges_do_not_double_count() {
        let counts = RuleCounts::parse(&["1", "...", "4", "3", "...", "6"]).unwrap();
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn parse_reversed_range_adds_nothing() {
        let counts = RuleCounts::parse(&["5", "...", "2"]).unwrap();
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn parse_rejects_non_integer_token() {
        assert_eq!(
            RuleCounts::parse(&["2", "x"]),
            Err(RuleError::MalformedCount {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_negative_count() {
        assert!(matches!(
            RuleCounts::parse(&["-1"]),
            Err(RuleError::MalformedCount { .. })
        ));
    }

    #[test]
    fn parse_rejects_dangling_range() {
        assert_eq!(RuleCounts::parse(&["...", "3"]), Err(RuleError::DanglingRange));
        assert_eq!(RuleCounts::parse(&["3", "..."]), Err(RuleError::DanglingRange));
        assert_eq!(
            RuleCounts::parse(&["3", "...", "..."]),
            Err(RuleError::DanglingRange)
        );
    }

    #[test]
    fn display_is_space_separated_ascending() {
        let counts = RuleCounts::parse(&["3", "1", "2"]).unwrap();
        assert_eq!(counts.to_string(), "1 2 3");
    }

    // ── Evaluation ──────────────────────────────────────────────

    #[test]
    fn conway_survival() {
        let rules = RuleSet::conway();
        assert_eq!(rules.next_state(CellState::Alive, 2), CellState::Alive);
        assert_eq!(rules.next_state(CellState::Alive, 3), CellState::Alive);
        assert_eq!(rules.next_state(CellState::Alive, 1), CellState::Dead);
        assert_eq!(rules.next_state(CellState::Alive, 4), CellState::Dead);
    }

    #[test]
    fn conway_birth() {
        let rules = RuleSet::conway();
        assert_eq!(rules.next_state(CellState::Dead, 3), CellState::Alive);
        assert_eq!(rules.next_state(CellState::Dead, 2), CellState::Dead);
        assert_eq!(rules.next_state(CellState::Dead, 0), CellState::Dead);
    }

    #[test]
    fn custom_rule_evaluation() {
        let rules = RuleSet {
            survival: RuleCounts::parse(&["1", "...", "8"]).unwrap(),
            birth: RuleCounts::from_counts([]),
        };
        assert_eq!(rules.next_state(CellState::Alive, 8), CellState::Alive);
        assert_eq!(rules.next_state(CellState::Alive, 0), CellState::Dead);
        assert_eq!(rules.next_state(CellState::Dead, 3), CellState::Dead);
    }
}
