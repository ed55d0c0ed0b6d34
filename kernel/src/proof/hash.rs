//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 for all V1 artifacts. Every hash is computed over
//! `domain_prefix || data`, where each prefix is null-terminated so that no
//! prefix is a prefix of another.
//!
//! **Exactly one place defines canonical hashing.** State fingerprints,
//! graph digests and report digests all route through [`canonical_hash`].

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the separator is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for puzzle state fingerprints (visited registry keys).
pub const DOMAIN_STATE_FINGERPRINT: &[u8] = b"CUBESTAR::STATE_FINGERPRINT::V1\0";

/// Domain prefix for search graph digests.
pub const DOMAIN_SEARCH_GRAPH: &[u8] = b"CUBESTAR::SEARCH_GRAPH::V1\0";

/// Domain prefix for solve report digests.
pub const DOMAIN_SOLVE_REPORT: &[u8] = b"CUBESTAR::SOLVE_REPORT::V1\0";

/// Every domain prefix in use. Lock tests check this set for uniqueness and
/// naming; a new domain must be added here.
pub const ALL_DOMAINS: &[&[u8]] = &[
    DOMAIN_STATE_FINGERPRINT,
    DOMAIN_SEARCH_GRAPH,
    DOMAIN_SOLVE_REPORT,
];

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    let colon = "sha256".len();
    ContentHash {
        full: format!("sha256:{digest}"),
        colon,
    }
}
