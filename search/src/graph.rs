//! `SearchGraphV1`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEventV1`
//! entries. Metadata carries the counters and the termination reason; both
//! are recorded whether or not individual events are kept.

use cubestar_kernel::carrier::moves::MoveV1;
use cubestar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use cubestar_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraphV1 {
    /// Ordered expansion events. Empty when the policy disables recording.
    pub expansions: Vec<ExpandEventV1>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + successor-expansion event.
#[derive(Debug, Clone)]
pub struct ExpandEventV1 {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Hex fingerprint of the expanded node's state.
    pub state_fingerprint: String,
    /// The frontier key at time of pop.
    pub frontier_pop_key: FrontierPopKeyV1,
    /// Path cost of the expanded node at time of pop.
    pub g_cost: i64,
    /// One record per generated successor, in generator order.
    pub candidates: Vec<CandidateRecordV1>,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKeyV1 {
    pub f_cost: i64,
    pub h_cost: i64,
    pub node_id: u64,
}

/// A generated successor with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecordV1 {
    /// Position in the generator's move list.
    pub index: u64,
    /// The move that produced the successor.
    pub mv: MoveV1,
    /// What happened to the successor.
    pub outcome: CandidateOutcomeV1,
}

/// Outcome of processing a successor during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcomeV1 {
    /// Unseen state; a new node was created and opened.
    Inserted { to_node: u64 },
    /// Seen state; the existing node took the expanded node as its parent.
    /// `requeued` is false when the node had already been expanded.
    Reparented {
        node_id: u64,
        previous_f: i64,
        new_f: i64,
        requeued: bool,
    },
    /// Seen state; the existing path was at least as cheap.
    DuplicateKept { node_id: u64 },
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    // Bindings
    pub adapter_id: String,
    pub heuristic: String,
    pub root_state_fingerprint: String,
    pub goal_state_fingerprint: String,
    pub policy: serde_json::Value,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_nodes_created: u64,
    pub total_duplicates_kept: u64,
    pub total_reparents: u64,
    pub frontier_high_water: u64,
    pub registry_size: u64,
    pub termination_reason: TerminationReasonV1,
    /// Number of moves in the returned path; `None` unless the goal was reached.
    pub solution_length: Option<u64>,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A node whose state equals the goal was withdrawn.
    GoalReached { node_id: u64 },
    /// Frontier emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// `max_frontier_size` budget was hit.
    FrontierBudgetExceeded,
}

impl TerminationReasonV1 {
    /// Stable snake-case tag, also used as the JSON `type`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::FrontierBudgetExceeded => "frontier_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest over the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "expansion_order": e.expansion_order,
        "frontier_pop_key": {
            "f_cost": e.frontier_pop_key.f_cost,
            "h_cost": e.frontier_pop_key.h_cost,
            "node_id": e.frontier_pop_key.node_id,
        },
        "g_cost": e.g_cost,
        "node_id": e.node_id,
        "state_fingerprint": e.state_fingerprint,
    })
}

fn candidate_record_to_json(r: &CandidateRecordV1) -> serde_json::Value {
    serde_json::json!({
        "index": r.index,
        "move": r.mv.to_json(),
        "outcome": outcome_to_json(&r.outcome),
    })
}

fn outcome_to_json(o: &CandidateOutcomeV1) -> serde_json::Value {
    match o {
        CandidateOutcomeV1::Inserted { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "inserted"})
        }
        CandidateOutcomeV1::Reparented {
            node_id,
            previous_f,
            new_f,
            requeued,
        } => serde_json::json!({
            "new_f": new_f,
            "node_id": node_id,
            "previous_f": previous_f,
            "requeued": requeued,
            "type": "reparented",
        }),
        CandidateOutcomeV1::DuplicateKept { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "duplicate_kept"})
        }
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "adapter_id": m.adapter_id,
        "frontier_high_water": m.frontier_high_water,
        "goal_state_fingerprint": m.goal_state_fingerprint,
        "heuristic": m.heuristic,
        "policy": m.policy,
        "registry_size": m.registry_size,
        "root_state_fingerprint": m.root_state_fingerprint,
        "solution_length": m.solution_length,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_duplicates_kept": m.total_duplicates_kept,
        "total_expansions": m.total_expansions,
        "total_nodes_created": m.total_nodes_created,
        "total_reparents": m.total_reparents,
    })
}

fn termination_reason_to_json(r: &TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        _ => serde_json::json!({"type": r.as_str()}),
    }
}
