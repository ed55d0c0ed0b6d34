//! Named heuristic evaluators.
//!
//! The set is closed: a heuristic is chosen by name when the solver is
//! built, and an unknown name is rejected there, before any search runs.
//!
//! Neither variant is proven admissible. On a side-3 cube a single outer
//! quarter turn can recolour up to 20 non-centre stickers (12 on the ring, 8
//! on a mixed turned face), which `Manhattan` scores as `20 / 8 = 2`: an
//! overestimate of the true distance 1. Returned paths are therefore
//! best-effort, not guaranteed minimal.

use std::str::FromStr;

use crate::contract::HeuristicProfileV1;
use crate::error::SearchError;

/// Closed set of heuristic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKindV1 {
    /// `floor(mismatches / pieces_per_move)`, skipping excluded positions.
    /// The production heuristic.
    Manhattan,
    /// `floor(sqrt(mismatches) / pieces_per_move)`. Kept for comparison
    /// only; it collapses to 0 for most shallow scrambles.
    Euclidean,
}

impl HeuristicKindV1 {
    /// Name accepted by [`FromStr`] and recorded in graphs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }

    /// Whether this variant is meant for production solves.
    #[must_use]
    pub const fn is_production_valid(self) -> bool {
        matches!(self, Self::Manhattan)
    }

    /// Estimate the remaining move count from `state` to `goal`.
    ///
    /// Both slices are position-aligned element views. Always non-negative;
    /// `estimate(s, s, _) == 0` for every `s`.
    #[must_use]
    pub fn estimate(self, state: &[u8], goal: &[u8], profile: &HeuristicProfileV1) -> i64 {
        let mismatches = state
            .iter()
            .zip(goal)
            .enumerate()
            .filter(|&(i, (a, b))| a != b && !profile.is_excluded(i))
            .count() as u64;
        let divisor = u64::from(profile.pieces_per_move.max(1));
        let estimate = match self {
            Self::Manhattan => mismatches / divisor,
            Self::Euclidean => integer_sqrt(mismatches) / divisor,
        };
        i64::try_from(estimate).unwrap_or(i64::MAX)
    }
}

impl FromStr for HeuristicKindV1 {
    type Err = SearchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(SearchError::InvalidHeuristicName {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for HeuristicKindV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// `floor(sqrt(n))`.
fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
