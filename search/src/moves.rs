//! Move generator: successor enumeration through the adapter.
//!
//! For every move in the generator's list (canonical order), the expanded
//! state is cloned into the adapter's working slot, exactly one move is
//! applied, and the result is read back. The expanded node's own state is
//! never handed to the adapter, so it cannot be mutated.

use cubestar_kernel::carrier::moves::MoveV1;

use crate::contract::StateAdapterV1;
use crate::error::SearchError;

/// The set of moves tried at every expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGeneratorV1 {
    size: u32,
    moves: Vec<MoveV1>,
}

impl MoveGeneratorV1 {
    /// Every elementary move for side `size`: `3 * size * 2` moves.
    #[must_use]
    pub fn full(size: u32) -> Self {
        Self {
            size,
            moves: MoveV1::all(size),
        }
    }

    /// A generator limited to `moves`. Duplicates are dropped and the list is
    /// put in canonical order so expansion stays reproducible regardless of
    /// how the caller listed them.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedMove`] if any move's layer is outside
    /// `0..size`.
    pub fn restricted(
        size: u32,
        moves: impl IntoIterator<Item = MoveV1>,
    ) -> Result<Self, SearchError> {
        let mut moves: Vec<MoveV1> = moves.into_iter().collect();
        for mv in &moves {
            mv.validate(size)?;
        }
        moves.sort();
        moves.dedup();
        Ok(Self { size, moves })
    }

    /// Side length this generator was built for.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Moves in expansion order.
    #[must_use]
    pub fn moves(&self) -> &[MoveV1] {
        &self.moves
    }

    /// Successor `(state, move)` pairs of `state`, in expansion order.
    ///
    /// Leaves the adapter's working state at the last successor; callers that
    /// care restore it afterwards.
    ///
    /// # Errors
    ///
    /// Propagates the adapter's rejection of a move as
    /// [`SearchError::MalformedMove`] or [`SearchError::AdapterFailure`].
    pub fn successors<A: StateAdapterV1>(
        &self,
        adapter: &mut A,
        state: &A::State,
    ) -> Result<Vec<(A::State, MoveV1)>, SearchError> {
        let mut out = Vec::with_capacity(self.moves.len());
        for &mv in &self.moves {
            adapter.set_state(state.clone());
            adapter.apply_move(mv)?;
            out.push((adapter.get_state(), mv));
        }
        Ok(out)
    }
}
