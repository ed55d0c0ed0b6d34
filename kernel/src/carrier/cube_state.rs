//! `CubeStateV1`: the facelet plane of an `n × n × n` cube.
//!
//! # Layout
//!
//! `6 * n * n` bytes, one colour per sticker, face-major:
//!
//! | Face index | Outward normal |
//! |------------|----------------|
//! | 0          | +X             |
//! | 1          | −X             |
//! | 2          | +Y             |
//! | 3          | −Y             |
//! | 4          | +Z             |
//! | 5          | −Z             |
//!
//! Within a face, stickers are ordered row-major over the two remaining axes
//! in cyclic order (for +X: `y` rows, `z` columns).
//!
//! # Equality semantics
//!
//! Value semantics: two states are equal iff their sizes and every facelet
//! match. `Hash` agrees with `Eq`, so states may key hash maps directly.

/// Number of faces on a cube.
pub const FACE_COUNT: usize = 6;

/// A cube configuration. Cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeStateV1 {
    size: u32,
    facelets: Vec<u8>,
}

impl CubeStateV1 {
    /// The solved configuration: every sticker on face `f` has colour `f`.
    #[must_use]
    pub fn solved(size: u32) -> Self {
        let per_face = (size as usize) * (size as usize);
        let mut facelets = Vec::with_capacity(FACE_COUNT * per_face);
        for face in 0..FACE_COUNT {
            #[allow(clippy::cast_possible_truncation)]
            facelets.extend(std::iter::repeat(face as u8).take(per_face));
        }
        Self { size, facelets }
    }

    /// Side length `n`.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Read-only facelet plane.
    #[must_use]
    pub fn facelets(&self) -> &[u8] {
        &self.facelets
    }

    /// Bytes hashed for state fingerprints: `size` (u32 LE) followed by the
    /// facelet plane. Including the size keeps different cube sizes apart.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.facelets.len());
        out.extend_from_slice(&self.size.to_le_bytes());
        out.extend_from_slice(&self.facelets);
        out
    }

    /// Apply a sticker permutation: `new[j] = old[sources[j]]`.
    ///
    /// Crate-internal; callers go through `operators::rotate::apply_move`.
    pub(crate) fn permuted(&self, sources: &[u32]) -> Self {
        let facelets = sources
            .iter()
            .map(|&src| self.facelets[src as usize])
            .collect();
        Self {
            size: self.size,
            facelets,
        }
    }
}
