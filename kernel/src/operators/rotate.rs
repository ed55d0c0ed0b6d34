//! `apply_move()`: apply one quarter turn to a `CubeStateV1`, producing a new state.
//!
//! The input state is never mutated. Two checks run before the gather:
//! 1. Size check: the state must match the geometry it is applied with.
//! 2. Move check: the layer must lie in `0..size`.

use std::fmt;

use crate::carrier::cube_state::CubeStateV1;
use crate::carrier::geometry::CubeGeometryV1;
use crate::carrier::moves::{MoveError, MoveV1};

/// Typed failure for move application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// The move triple is outside the puzzle's valid ranges.
    MalformedMove(MoveError),
    /// The state was built for a different cube size than the geometry.
    SizeMismatch { state_size: u32, geometry_size: u32 },
}

impl fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedMove(e) => write!(f, "malformed move: {e}"),
            Self::SizeMismatch {
                state_size,
                geometry_size,
            } => write!(
                f,
                "state size {state_size} does not match geometry size {geometry_size}"
            ),
        }
    }
}

impl std::error::Error for ApplyFailure {}

impl From<MoveError> for ApplyFailure {
    fn from(e: MoveError) -> Self {
        Self::MalformedMove(e)
    }
}

/// Apply `mv` to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure::SizeMismatch`] if `state` and `geometry` disagree
/// on size, or [`ApplyFailure::MalformedMove`] if the layer is out of range.
pub fn apply_move(
    geometry: &CubeGeometryV1,
    state: &CubeStateV1,
    mv: MoveV1,
) -> Result<CubeStateV1, ApplyFailure> {
    if state.size() != geometry.size() {
        return Err(ApplyFailure::SizeMismatch {
            state_size: state.size(),
            geometry_size: geometry.size(),
        });
    }
    mv.validate(geometry.size())?;
    let table = geometry.table(mv).ok_or(ApplyFailure::MalformedMove(
        MoveError::LayerOutOfRange {
            layer: mv.layer,
            size: geometry.size(),
        },
    ))?;
    Ok(state.permuted(table))
}
