//! Shared helpers for cubestar benchmark suites.

use cubestar_harness::worlds::cube::CubeWorld;
use cubestar_kernel::carrier::moves::MoveV1;

/// A deterministic scramble of `len` moves for side `size`.
///
/// Walks the canonical move list with a stride coprime to its length, and
/// skips any move that would undo the previous one, so the sequence never
/// collapses to a shorter scramble by immediate cancellation.
#[must_use]
pub fn scramble_sequence(size: u32, len: usize) -> Vec<MoveV1> {
    let all = MoveV1::all(size);
    let mut out: Vec<MoveV1> = Vec::with_capacity(len);
    let mut cursor = 0usize;
    while out.len() < len && !all.is_empty() {
        cursor = (cursor + 7) % all.len();
        let candidate = all[cursor];
        if out.last().is_some_and(|prev| prev.inverse() == candidate) {
            continue;
        }
        out.push(candidate);
    }
    out
}

/// A cube world scrambled by [`scramble_sequence`].
///
/// # Panics
///
/// Panics if `size` has no geometry. Benchmark setup failures are fatal.
#[must_use]
pub fn scrambled_cube(size: u32, len: usize) -> CubeWorld {
    CubeWorld::scrambled(size, &scramble_sequence(size, len)).expect("benchmark cube")
}
