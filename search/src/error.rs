//! Typed search errors.
//!
//! Construction-time failures (`InvalidHeuristicName`, `InvalidPolicy`,
//! `MalformedMove` in a restricted generator) are returned before any search
//! step runs. Frontier exhaustion is NOT an error at the `solve` boundary: it
//! is reported through [`crate::search::SearchOutcomeV1::Exhausted`] with a
//! complete `SearchGraphV1`. [`SearchError::SearchExhausted`] exists for
//! callers that convert a result into moves with `?`.

use crate::graph::TerminationReasonV1;

/// Typed failure for search construction and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The heuristic identifier is not in the recognized set.
    InvalidHeuristicName { name: String },
    /// A move triple is outside the puzzle's valid ranges.
    MalformedMove { detail: String },
    /// The adapter rejected an operation for a reason other than the move.
    AdapterFailure { detail: String },
    /// A policy field holds a value the engine cannot honour.
    InvalidPolicy { detail: String },
    /// The search terminated without reaching the goal.
    SearchExhausted {
        reason: TerminationReasonV1,
        expansions: u64,
    },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeuristicName { name } => {
                write!(f, "invalid heuristic name: {name:?} (expected \"manhattan\" or \"euclidean\")")
            }
            Self::MalformedMove { detail } => write!(f, "malformed move: {detail}"),
            Self::AdapterFailure { detail } => write!(f, "adapter failure: {detail}"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::SearchExhausted { reason, expansions } => {
                write!(
                    f,
                    "search exhausted without reaching the goal after {expansions} expansions ({})",
                    reason.as_str()
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl From<cubestar_kernel::operators::rotate::ApplyFailure> for SearchError {
    fn from(failure: cubestar_kernel::operators::rotate::ApplyFailure) -> Self {
        use cubestar_kernel::operators::rotate::ApplyFailure;
        match failure {
            ApplyFailure::MalformedMove(e) => Self::MalformedMove {
                detail: e.to_string(),
            },
            other @ ApplyFailure::SizeMismatch { .. } => Self::AdapterFailure {
                detail: other.to_string(),
            },
        }
    }
}

impl From<cubestar_kernel::carrier::moves::MoveError> for SearchError {
    fn from(e: cubestar_kernel::carrier::moves::MoveError) -> Self {
        Self::MalformedMove {
            detail: e.to_string(),
        }
    }
}
