//! Best-first frontier (open list) with lazy decrease-key.
//!
//! The frontier holds ordering keys, not nodes; nodes live in the engine's
//! arena and are addressed by `node_id`. A node whose cost improves while it
//! is still open is re-pushed with its new key. The superseded heap entry
//! stays behind and is discarded when it surfaces, because it no longer
//! matches the node's live key.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::node::FrontierKey;

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` of `Reverse<FrontierKey>` for O(log n) min extraction
/// - A `HashMap<u64, FrontierKey>` of live (open) nodes and their current keys
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    live: HashMap<u64, FrontierKey>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            high_water: 0,
        }
    }

    /// Open a node, or re-key it if it is already open.
    ///
    /// Returns `true` if the node was not open before.
    pub fn push(&mut self, key: FrontierKey) -> bool {
        let newly_open = self.live.insert(key.node_id, key).is_none();
        self.heap.push(Reverse(key));
        let size = self.live.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        newly_open
    }

    /// Withdraw the best (lowest key) open node.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierKey> {
        while let Some(Reverse(key)) = self.heap.pop() {
            if self.live.get(&key.node_id) == Some(&key) {
                self.live.remove(&key.node_id);
                return Some(key);
            }
        }
        None
    }

    /// Whether `node_id` is currently open.
    #[must_use]
    pub fn contains(&self, node_id: u64) -> bool {
        self.live.contains_key(&node_id)
    }

    /// Number of open nodes (stale heap entries excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no node is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// High-water mark of open nodes.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
