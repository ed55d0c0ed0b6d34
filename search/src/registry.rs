//! Visited registry (closed list): every state ever generated, keyed by its
//! canonical fingerprint.
//!
//! Lookup is hashed, not a scan. The registry maps a fingerprint to the
//! arena id of the node that first produced it; duplicates are resolved by
//! re-parenting that node, never by inserting a second entry.

use std::collections::HashMap;

use cubestar_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_STATE_FINGERPRINT};

use crate::contract::StateAdapterV1;

/// Fingerprint of `state` under `adapter`'s identity encoding.
#[must_use]
pub fn state_fingerprint<A: StateAdapterV1>(adapter: &A, state: &A::State) -> ContentHash {
    canonical_hash(DOMAIN_STATE_FINGERPRINT, &adapter.identity_bytes(state))
}

/// Fingerprint → node id index.
#[derive(Debug, Default)]
pub struct VisitedRegistryV1 {
    index: HashMap<ContentHash, u64>,
}

impl VisitedRegistryV1 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `fingerprint` for `node_id`.
    ///
    /// Returns `false` (and keeps the existing entry) if the fingerprint is
    /// already registered.
    pub fn insert(&mut self, fingerprint: ContentHash, node_id: u64) -> bool {
        match self.index.entry(fingerprint) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(node_id);
                true
            }
        }
    }

    /// The node registered for `fingerprint`, if any.
    #[must_use]
    pub fn lookup(&self, fingerprint: &ContentHash) -> Option<u64> {
        self.index.get(fingerprint).copied()
    }

    /// Number of distinct states seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
