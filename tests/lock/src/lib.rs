//! Shared fixtures for the cross-crate lock tests.
//!
//! Every helper panics on setup failure; a broken fixture is a test bug, not
//! a condition under test.

#![forbid(unsafe_code)]

use cubestar_harness::worlds::cube::CubeWorld;
use cubestar_kernel::carrier::cube_state::CubeStateV1;
use cubestar_kernel::carrier::moves::{AxisV1, DirectionV1, MoveV1};
use cubestar_kernel::proof::replay::replay_moves;
use cubestar_search::search::{AStarSolver, SearchResult};

/// Shorthand move constructor: `mv('X', 0, 1)`.
///
/// # Panics
///
/// Panics on an axis other than `X`, `Y`, `Z` or a direction other than ±1.
#[must_use]
pub fn mv(axis: char, layer: u32, direction: i8) -> MoveV1 {
    let axis = match axis {
        'X' => AxisV1::X,
        'Y' => AxisV1::Y,
        'Z' => AxisV1::Z,
        other => panic!("fixture axis {other:?}"),
    };
    let direction = DirectionV1::from_i8(direction).unwrap();
    MoveV1::new(axis, layer, direction)
}

/// A cube of side `size` scrambled by `scramble`.
///
/// # Panics
///
/// Panics if the size or a scramble move is invalid.
#[must_use]
pub fn scrambled_world(size: u32, scramble: &[MoveV1]) -> CubeWorld {
    CubeWorld::scrambled(size, scramble).unwrap()
}

/// Solve a scrambled cube toward solved with `heuristic`.
///
/// # Panics
///
/// Panics if the world or solver cannot be built or the search errors.
#[must_use]
pub fn solve_scrambled(
    size: u32,
    scramble: &[MoveV1],
    heuristic: &str,
) -> SearchResult<CubeStateV1> {
    let mut solver = AStarSolver::new(scrambled_world(size, scramble), heuristic, false).unwrap();
    solver.solve_to_solved().unwrap()
}

/// Apply `moves` to `start` on a fresh geometry of matching size.
///
/// # Panics
///
/// Panics if a move does not apply.
#[must_use]
pub fn replay(start: &CubeStateV1, moves: &[MoveV1]) -> CubeStateV1 {
    let world = CubeWorld::new(start.size()).unwrap();
    replay_moves(world.geometry(), start, moves).unwrap()
}

/// A 2-cube scramble whose solve improves already-registered nodes, several
/// of them while still on the frontier.
#[must_use]
pub fn reparenting_scramble() -> Vec<MoveV1> {
    vec![mv('X', 0, -1), mv('X', 1, 1), mv('Y', 0, 1), mv('Y', 0, 1)]
}
