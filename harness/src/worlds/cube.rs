//! `CubeWorld`: the n×n×n cube as a search adapter.
//!
//! Wraps the kernel's geometry and one working [`CubeStateV1`]. Moves go
//! through the kernel's permutation tables, which return a fresh state; the
//! working state is replaced, never edited in place, so a state handed out by
//! `get_state` cannot change afterwards.
//!
//! Face centres on odd cubes are excluded from the heuristic's mismatch
//! count. Outer turns leave them in place; slice turns move them.

use cubestar_kernel::carrier::cube_state::CubeStateV1;
use cubestar_kernel::carrier::geometry::{CubeGeometryV1, GeometryError};
use cubestar_kernel::carrier::moves::MoveV1;
use cubestar_kernel::operators::rotate::{apply_move, ApplyFailure};
use cubestar_search::contract::{HeuristicProfileV1, StateAdapterV1};

/// Adapter identifier recorded in search graphs and reports.
pub const CUBE_WORLD_ID: &str = "cube";

/// Error building a cube world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeWorldError {
    /// The side length has no geometry.
    Geometry(GeometryError),
    /// A scramble move could not be applied.
    Scramble { index: usize, failure: ApplyFailure },
}

impl std::fmt::Display for CubeWorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry: {e}"),
            Self::Scramble { index, failure } => {
                write!(f, "scramble move {index} failed: {failure}")
            }
        }
    }
}

impl std::error::Error for CubeWorldError {}

impl From<GeometryError> for CubeWorldError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

/// An n-cube with a working state.
#[derive(Debug, Clone)]
pub struct CubeWorld {
    geometry: CubeGeometryV1,
    working: CubeStateV1,
}

impl CubeWorld {
    /// A solved cube of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`CubeWorldError::Geometry`] for an unsupported size.
    pub fn new(size: u32) -> Result<Self, CubeWorldError> {
        let geometry = CubeGeometryV1::new(size)?;
        Ok(Self {
            geometry,
            working: CubeStateV1::solved(size),
        })
    }

    /// A cube of side `size` scrambled by `moves`, applied in order to the
    /// solved state.
    ///
    /// # Errors
    ///
    /// Returns [`CubeWorldError`] for an unsupported size or an out-of-range
    /// scramble move.
    pub fn scrambled(size: u32, moves: &[MoveV1]) -> Result<Self, CubeWorldError> {
        let mut world = Self::new(size)?;
        world.scramble(moves)?;
        Ok(world)
    }

    /// Apply `moves` to the working state in order.
    ///
    /// On failure the working state is left as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`CubeWorldError::Scramble`] naming the first bad move.
    pub fn scramble(&mut self, moves: &[MoveV1]) -> Result<(), CubeWorldError> {
        let mut state = self.working.clone();
        for (index, &mv) in moves.iter().enumerate() {
            state = apply_move(&self.geometry, &state, mv)
                .map_err(|failure| CubeWorldError::Scramble { index, failure })?;
        }
        self.working = state;
        Ok(())
    }

    #[must_use]
    pub fn geometry(&self) -> &CubeGeometryV1 {
        &self.geometry
    }

    /// The working state.
    #[must_use]
    pub fn state(&self) -> &CubeStateV1 {
        &self.working
    }
}

impl StateAdapterV1 for CubeWorld {
    type State = CubeStateV1;

    fn adapter_id(&self) -> &str {
        CUBE_WORLD_ID
    }

    fn size(&self) -> u32 {
        self.geometry.size()
    }

    fn get_state(&self) -> CubeStateV1 {
        self.working.clone()
    }

    fn set_state(&mut self, state: CubeStateV1) {
        self.working = state;
    }

    fn apply_move(&mut self, mv: MoveV1) -> Result<(), ApplyFailure> {
        self.working = apply_move(&self.geometry, &self.working, mv)?;
        Ok(())
    }

    fn elements<'a>(&self, state: &'a CubeStateV1) -> &'a [u8] {
        state.facelets()
    }

    fn identity_bytes(&self, state: &CubeStateV1) -> Vec<u8> {
        state.identity_bytes()
    }

    fn heuristic_profile(&self) -> HeuristicProfileV1 {
        HeuristicProfileV1 {
            excluded_positions: self.geometry.centre_mask().to_vec(),
            pieces_per_move: self.geometry.pieces_per_move(),
        }
    }

    fn solved_state(&self) -> CubeStateV1 {
        CubeStateV1::solved(self.geometry.size())
    }
}
