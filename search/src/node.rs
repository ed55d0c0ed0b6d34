//! Search node, cost model and frontier ordering key.
//!
//! # Cost invariants
//!
//! - `f_cost == g_cost + h_cost` at all times. The fields are private and
//!   only [`SearchNodeV1::create`] and [`SearchNodeV1::try_reparent`] write
//!   them, always together.
//! - `g_cost == 0` for the root; otherwise `g_cost == parent.g_cost + 1`
//!   at the time the parent link was written.
//! - `h_cost` depends only on the state and never changes.
//!
//! # Identity
//!
//! Two nodes are equal iff their states are equal. Costs, parent links and
//! ids do not take part, so the same configuration reached along different
//! paths is recognized as one entry.

use cubestar_kernel::carrier::moves::MoveV1;
use cubestar_kernel::proof::hash::ContentHash;

/// Copyable view of a prospective parent: enough to cost a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    pub node_id: u64,
    pub g_cost: i64,
}

/// Record of a successful re-parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReparentV1 {
    pub previous_parent: Option<u64>,
    pub previous_f: i64,
    pub new_f: i64,
}

/// A search node in the arena.
///
/// `node_id` doubles as creation order: ids are assigned densely from 0 in
/// the order nodes are first generated.
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S> {
    /// Arena index, assigned at creation.
    pub node_id: u64,
    /// Best-known predecessor (`None` for root).
    pub parent_id: Option<u64>,
    /// The node's own state; never shared with another node.
    pub state: S,
    /// Canonical fingerprint of `state` (visited-registry key).
    pub state_fingerprint: ContentHash,
    /// The move that produced `state` from the parent's state.
    pub producing_move: Option<MoveV1>,
    g_cost: i64,
    h_cost: i64,
    f_cost: i64,
}

impl<S> SearchNodeV1<S> {
    /// Create a node. `g = parent.g + 1` with a parent, `0` without.
    #[must_use]
    pub fn create(
        node_id: u64,
        state: S,
        state_fingerprint: ContentHash,
        parent: Option<ParentLink>,
        h_cost: i64,
        producing_move: Option<MoveV1>,
    ) -> Self {
        let g_cost = match parent {
            Some(link) => link.g_cost.saturating_add(1),
            None => 0,
        };
        Self {
            node_id,
            parent_id: parent.map(|link| link.node_id),
            state,
            state_fingerprint,
            producing_move,
            g_cost,
            h_cost,
            f_cost: g_cost.saturating_add(h_cost),
        }
    }

    /// Offer a cheaper path through `candidate`.
    ///
    /// Replaces `parent_id`, `g_cost` and `f_cost` iff the new `f` is strictly
    /// lower; otherwise leaves the node untouched and returns `None`.
    /// `producing_move` is replaced by `via` on success since the move from
    /// the new parent differs from the old one.
    pub fn try_reparent(&mut self, candidate: ParentLink, via: MoveV1) -> Option<ReparentV1> {
        let g = candidate.g_cost.saturating_add(1);
        let f = g.saturating_add(self.h_cost);
        if f >= self.f_cost {
            return None;
        }
        let record = ReparentV1 {
            previous_parent: self.parent_id,
            previous_f: self.f_cost,
            new_f: f,
        };
        self.parent_id = Some(candidate.node_id);
        self.producing_move = Some(via);
        self.g_cost = g;
        self.f_cost = f;
        Some(record)
    }

    /// Path cost from the root.
    #[must_use]
    pub fn g_cost(&self) -> i64 {
        self.g_cost
    }

    /// Heuristic estimate to the goal.
    #[must_use]
    pub fn h_cost(&self) -> i64 {
        self.h_cost
    }

    /// `g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.f_cost
    }

    /// This node as a prospective parent.
    #[must_use]
    pub fn link(&self) -> ParentLink {
        ParentLink {
            node_id: self.node_id,
            g_cost: self.g_cost,
        }
    }

    /// Current frontier ordering key.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            f_cost: self.f_cost,
            h_cost: self.h_cost,
            node_id: self.node_id,
        }
    }
}

impl<S: PartialEq> PartialEq for SearchNodeV1<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq> Eq for SearchNodeV1<S> {}

/// The frontier ordering key: `(f_cost, h_cost, node_id)`.
///
/// Lower `f_cost` first, then lower `h_cost` (closer to the goal by the
/// estimate), then older `node_id` (earliest insertion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub h_cost: i64,
    pub node_id: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.h_cost.cmp(&other.h_cost))
            .then(self.node_id.cmp(&other.node_id))
    }
}
