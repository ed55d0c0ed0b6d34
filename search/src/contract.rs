//! Puzzle adapter contract trait.

use cubestar_kernel::carrier::moves::MoveV1;
use cubestar_kernel::operators::rotate::ApplyFailure;

/// Per-puzzle inputs to the reference heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicProfileV1 {
    /// `true` for element positions skipped when counting mismatches (the
    /// cube's face centres). Skipped positions may still change colour.
    pub excluded_positions: Vec<bool>,
    /// Pieces displaced by one elementary move. The mismatch count is divided
    /// by this value. Must be at least 1.
    pub pieces_per_move: u32,
}

impl HeuristicProfileV1 {
    /// Profile with no excluded positions and a divisor of 1.
    #[must_use]
    pub fn unit(element_count: usize) -> Self {
        Self {
            excluded_positions: vec![false; element_count],
            pieces_per_move: 1,
        }
    }

    /// Whether position `index` is excluded from mismatch counting.
    #[must_use]
    pub fn is_excluded(&self, index: usize) -> bool {
        self.excluded_positions.get(index).copied().unwrap_or(false)
    }
}

/// Trait for puzzles that support search.
///
/// The adapter owns one working state. The search engine drives it with
/// `set_state` / `apply_move` / `get_state` to produce successors; node
/// states are never handed to the adapter by reference, so no two nodes can
/// alias the same state.
///
/// # Contract
///
/// - `apply_move` mutates only the adapter's own working state.
/// - `elements` is a flat, position-aligned view used by heuristics: the
///   same index must denote the same puzzle position in every state.
/// - `identity_bytes` must be injective over states (equal bytes iff equal
///   states); it feeds the visited-registry fingerprint.
pub trait StateAdapterV1 {
    /// Opaque, fully comparable puzzle configuration.
    type State: Clone + Eq + std::fmt::Debug;

    /// Stable adapter identifier recorded in search graphs.
    fn adapter_id(&self) -> &str;

    /// Linear puzzle size; drives move enumeration (`3 * size * 2` moves).
    fn size(&self) -> u32;

    /// Snapshot of the working state.
    fn get_state(&self) -> Self::State;

    /// Replace the working state.
    fn set_state(&mut self, state: Self::State);

    /// Apply one elementary move to the working state in place.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyFailure`] if the move is outside the puzzle's ranges
    /// or the working state is inconsistent with the adapter.
    fn apply_move(&mut self, mv: MoveV1) -> Result<(), ApplyFailure>;

    /// Position-aligned element view of a state.
    fn elements<'a>(&self, state: &'a Self::State) -> &'a [u8];

    /// Canonical bytes hashed into the state fingerprint.
    fn identity_bytes(&self, state: &Self::State) -> Vec<u8> {
        self.elements(state).to_vec()
    }

    /// Heuristic inputs for this puzzle.
    fn heuristic_profile(&self) -> HeuristicProfileV1;

    /// A freshly built solved configuration.
    fn solved_state(&self) -> Self::State;
}
