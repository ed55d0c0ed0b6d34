//! Minimal puzzle for unit tests: one dial per `(axis, layer)`, each
//! counting quarter turns mod 4. Solved when every dial reads 0.
//!
//! Distances are easy to reason about: a dial at 1 or 3 is one move from
//! home, a dial at 2 is two moves away, and dials are independent.

use cubestar_kernel::carrier::moves::{MoveError, MoveV1};
use cubestar_kernel::operators::rotate::ApplyFailure;

use crate::contract::{HeuristicProfileV1, StateAdapterV1};

pub(crate) struct DialAdapter {
    size: u32,
    working: Vec<u8>,
    pub(crate) applied: usize,
}

impl DialAdapter {
    pub(crate) fn new(size: u32) -> Self {
        Self {
            size,
            working: vec![0; 3 * size as usize],
            applied: 0,
        }
    }

    /// Adapter positioned at the solved state after applying `moves`.
    pub(crate) fn scrambled(size: u32, moves: &[MoveV1]) -> Self {
        let mut adapter = Self::new(size);
        for &mv in moves {
            adapter.apply_move(mv).unwrap();
        }
        adapter.applied = 0;
        adapter
    }
}

impl StateAdapterV1 for DialAdapter {
    type State = Vec<u8>;

    fn adapter_id(&self) -> &str {
        "dials"
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn get_state(&self) -> Vec<u8> {
        self.working.clone()
    }

    fn set_state(&mut self, state: Vec<u8>) {
        self.working = state;
    }

    fn apply_move(&mut self, mv: MoveV1) -> Result<(), ApplyFailure> {
        if mv.layer >= self.size {
            return Err(ApplyFailure::MalformedMove(MoveError::LayerOutOfRange {
                layer: mv.layer,
                size: self.size,
            }));
        }
        let dial = mv.axis.index() * self.size as usize + mv.layer as usize;
        let delta: u8 = if mv.direction.to_i8() > 0 { 1 } else { 3 };
        self.working[dial] = (self.working[dial] + delta) % 4;
        self.applied += 1;
        Ok(())
    }

    fn elements<'a>(&self, state: &'a Vec<u8>) -> &'a [u8] {
        state
    }

    fn heuristic_profile(&self) -> HeuristicProfileV1 {
        HeuristicProfileV1::unit(3 * self.size as usize)
    }

    fn solved_state(&self) -> Vec<u8> {
        vec![0; 3 * self.size as usize]
    }
}
