//! `CubeGeometryV1`: sticker coordinates and precomputed move permutations.
//!
//! Coordinates are doubled integers so that every cubie centre is integral:
//! along each axis a cubie sits at `2k - (n - 1)` for layer `k` in `0..n`.
//! A sticker is identified by its cubie position plus its outward normal.
//!
//! A quarter turn about axis `a` maps, for the two remaining axes taken in
//! cyclic order `(u, v)`:
//!
//! ```text
//! +1:  u' = -v,  v' =  u
//! -1:  u' =  v,  v' = -u
//! ```
//!
//! Both position and normal rotate. Every move's permutation is computed once
//! at construction; applying a move is then a single gather.

use std::collections::HashMap;
use std::fmt;

use crate::carrier::cube_state::FACE_COUNT;
use crate::carrier::moves::{AxisV1, DirectionV1, MoveV1};

/// Largest supported side length.
pub const MAX_CUBE_SIZE: u32 = 32;

/// Typed failure for geometry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Side length is zero or above [`MAX_CUBE_SIZE`].
    UnsupportedSize { size: u32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize { size } => {
                write!(f, "unsupported cube size {size} (expected 1..={MAX_CUBE_SIZE})")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

type Vec3 = [i32; 3];

#[derive(Debug, Clone, Copy)]
struct Sticker {
    position: Vec3,
    normal: Vec3,
}

/// Static layout of an `n`-cube.
#[derive(Debug, Clone)]
pub struct CubeGeometryV1 {
    size: u32,
    stickers: Vec<Sticker>,
    /// One gather table per move, indexed in canonical move order.
    tables: Vec<Vec<u32>>,
    /// Stickers at face centres (odd sizes only). Slice turns move them.
    centre_mask: Vec<bool>,
}

impl CubeGeometryV1 {
    /// Build the layout and all move tables for side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedSize`] for `size == 0` or
    /// `size > MAX_CUBE_SIZE`.
    pub fn new(size: u32) -> Result<Self, GeometryError> {
        if size == 0 || size > MAX_CUBE_SIZE {
            return Err(GeometryError::UnsupportedSize { size });
        }
        let stickers = build_stickers(size);
        let index: HashMap<(Vec3, Vec3), u32> = stickers
            .iter()
            .enumerate()
            .map(|(i, s)| {
                #[allow(clippy::cast_possible_truncation)]
                let i = i as u32;
                ((s.position, s.normal), i)
            })
            .collect();

        let tables = MoveV1::all(size)
            .into_iter()
            .map(|mv| build_table(size, &stickers, &index, mv))
            .collect();

        let centre_mask = stickers
            .iter()
            .map(|s| {
                let axis = normal_axis(s.normal);
                let (u, v) = cyclic_pair(axis);
                s.position[u] == 0 && s.position[v] == 0
            })
            .collect();

        Ok(Self {
            size,
            stickers,
            tables,
            centre_mask,
        })
    }

    /// Side length `n`.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of stickers (`6 * n * n`).
    #[must_use]
    pub fn sticker_count(&self) -> usize {
        self.stickers.len()
    }

    /// `true` for stickers at a face centre. Empty of `true` for even sizes.
    #[must_use]
    pub fn centre_mask(&self) -> &[bool] {
        &self.centre_mask
    }

    /// Cubies displaced by one outer-layer quarter turn: the ring of the
    /// layer, `4 * (n - 1)`. Never below 1.
    #[must_use]
    pub fn pieces_per_move(&self) -> u32 {
        (4 * (self.size - 1)).max(1)
    }

    /// Gather table for `mv`, or `None` if the layer is out of range.
    #[must_use]
    pub fn table(&self, mv: MoveV1) -> Option<&[u32]> {
        if mv.layer >= self.size {
            return None;
        }
        let dir = match mv.direction {
            DirectionV1::Negative => 0,
            DirectionV1::Positive => 1,
        };
        let slot = (mv.axis.index() * self.size as usize + mv.layer as usize) * 2 + dir;
        self.tables.get(slot).map(Vec::as_slice)
    }
}

fn cyclic_pair(axis: usize) -> (usize, usize) {
    ((axis + 1) % 3, (axis + 2) % 3)
}

fn normal_axis(normal: Vec3) -> usize {
    normal.iter().position(|&c| c != 0).unwrap_or(0)
}

fn build_stickers(size: u32) -> Vec<Sticker> {
    #[allow(clippy::cast_possible_wrap)]
    let n = size as i32;
    let mut stickers = Vec::with_capacity(FACE_COUNT * (size * size) as usize);
    for face in 0..FACE_COUNT {
        let axis = face / 2;
        let sign = if face % 2 == 0 { 1 } else { -1 };
        let (u, v) = cyclic_pair(axis);
        for a in 0..n {
            for b in 0..n {
                let mut position = [0; 3];
                position[axis] = sign * (n - 1);
                position[u] = 2 * a - (n - 1);
                position[v] = 2 * b - (n - 1);
                let mut normal = [0; 3];
                normal[axis] = sign;
                stickers.push(Sticker { position, normal });
            }
        }
    }
    stickers
}

fn rotate(vec: Vec3, axis: AxisV1, direction: DirectionV1) -> Vec3 {
    let (u, v) = cyclic_pair(axis.index());
    let mut out = vec;
    match direction {
        DirectionV1::Positive => {
            out[u] = -vec[v];
            out[v] = vec[u];
        }
        DirectionV1::Negative => {
            out[u] = vec[v];
            out[v] = -vec[u];
        }
    }
    out
}

fn build_table(
    size: u32,
    stickers: &[Sticker],
    index: &HashMap<(Vec3, Vec3), u32>,
    mv: MoveV1,
) -> Vec<u32> {
    #[allow(clippy::cast_possible_wrap)]
    let layer_coord = 2 * mv.layer as i32 - (size as i32 - 1);
    #[allow(clippy::cast_possible_truncation)]
    let mut sources: Vec<u32> = (0..stickers.len() as u32).collect();
    for (i, sticker) in stickers.iter().enumerate() {
        if sticker.position[mv.axis.index()] != layer_coord {
            continue;
        }
        let key = (
            rotate(sticker.position, mv.axis, mv.direction),
            rotate(sticker.normal, mv.axis, mv.direction),
        );
        // Rotations map the sticker set onto itself, so the lookup always hits.
        if let Some(&dst) = index.get(&key) {
            #[allow(clippy::cast_possible_truncation)]
            let src = i as u32;
            sources[dst as usize] = src;
        }
    }
    sources
}
