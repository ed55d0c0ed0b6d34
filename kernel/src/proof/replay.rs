//! Replay verification: re-apply a move sequence and compare against a goal.
//!
//! A `ReplayError` means the sequence could not be replayed at all (a move
//! failed to apply). A replay that runs to completion but ends elsewhere is
//! reported as [`ReplayError::Divergence`] carrying both fingerprints.

use std::fmt;

use crate::carrier::cube_state::CubeStateV1;
use crate::carrier::geometry::CubeGeometryV1;
use crate::carrier::moves::MoveV1;
use crate::operators::rotate::{apply_move, ApplyFailure};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_STATE_FINGERPRINT};

/// Error during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Move `index` could not be applied.
    ApplyFailed { index: usize, failure: ApplyFailure },
    /// Replay completed but the final state is not the goal.
    Divergence {
        reached: ContentHash,
        expected: ContentHash,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApplyFailed { index, failure } => {
                write!(f, "move {index} failed to apply: {failure}")
            }
            Self::Divergence { reached, expected } => {
                write!(f, "replay diverged: reached {reached}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

/// Fingerprint of a cube state under the state-fingerprint domain.
#[must_use]
pub fn state_fingerprint(state: &CubeStateV1) -> ContentHash {
    canonical_hash(DOMAIN_STATE_FINGERPRINT, &state.identity_bytes())
}

/// Apply `moves` to `start` in order.
///
/// # Errors
///
/// Returns [`ReplayError::ApplyFailed`] at the first move that fails.
pub fn replay_moves(
    geometry: &CubeGeometryV1,
    start: &CubeStateV1,
    moves: &[MoveV1],
) -> Result<CubeStateV1, ReplayError> {
    let mut state = start.clone();
    for (index, &mv) in moves.iter().enumerate() {
        state = apply_move(geometry, &state, mv)
            .map_err(|failure| ReplayError::ApplyFailed { index, failure })?;
    }
    Ok(state)
}

/// Verify that applying `moves` to `start` yields exactly `goal`.
///
/// # Errors
///
/// Returns [`ReplayError::ApplyFailed`] or [`ReplayError::Divergence`].
pub fn verify_solution(
    geometry: &CubeGeometryV1,
    start: &CubeStateV1,
    moves: &[MoveV1],
    goal: &CubeStateV1,
) -> Result<(), ReplayError> {
    let reached = replay_moves(geometry, start, moves)?;
    if &reached != goal {
        return Err(ReplayError::Divergence {
            reached: state_fingerprint(&reached),
            expected: state_fingerprint(goal),
        });
    }
    Ok(())
}
