//! Harness runner: scramble, solve, replay-verify, report.
//!
//! # Pipeline
//!
//! ```text
//! CubeWorld::scramble() → AStarSolver::new() → with_policy()
//!   → solve(fresh solved goal) → verify_solution() (goal reached only)
//!   → SearchGraphV1::digest() → SolveReportV1
//! ```
//!
//! The runner does not implement search or move logic itself. A solution
//! that fails replay is a hard error: the report is never built for it.

use cubestar_kernel::carrier::cube_state::CubeStateV1;
use cubestar_kernel::carrier::moves::MoveV1;
use cubestar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use cubestar_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SOLVE_REPORT};
use cubestar_kernel::proof::replay::{state_fingerprint, verify_solution, ReplayError};
use cubestar_search::contract::StateAdapterV1;
use cubestar_search::error::SearchError;
use cubestar_search::graph::SearchGraphV1;
use cubestar_search::policy::SearchPolicyV1;
use cubestar_search::search::{AStarSolver, SearchOutcomeV1};
use tracing::info;

use crate::worlds::cube::{CubeWorld, CubeWorldError};

/// Report schema tag.
pub const SOLVE_REPORT_SCHEMA: &str = "solve_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The scramble could not be applied.
    World(CubeWorldError),
    /// Solver construction or search failed.
    Search(SearchError),
    /// The returned solution does not reach the goal on replay.
    Replay(ReplayError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World(e) => write!(f, "world: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
            Self::Replay(e) => write!(f, "replay: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<CubeWorldError> for RunError {
    fn from(e: CubeWorldError) -> Self {
        Self::World(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ReplayError> for RunError {
    fn from(e: ReplayError) -> Self {
        Self::Replay(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed {
            detail: e.to_string(),
        }
    }
}

/// Summary of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReportV1 {
    pub adapter_id: String,
    pub size: u32,
    pub heuristic: String,
    /// Moves applied to the world before solving, in order.
    pub scramble: Vec<MoveV1>,
    /// Hex of the start facelet plane.
    pub start_facelets_hex: String,
    pub start_fingerprint: ContentHash,
    pub goal_fingerprint: ContentHash,
    pub outcome: SearchOutcomeV1,
    /// `true` iff the goal was reached and the moves replayed to it.
    pub replay_verified: bool,
    pub total_expansions: u64,
    pub total_nodes_created: u64,
    pub total_reparents: u64,
    pub frontier_high_water: u64,
    pub search_graph_digest: ContentHash,
}

impl SolveReportV1 {
    /// Solution moves, if the goal was reached.
    #[must_use]
    pub fn solution(&self) -> Option<&[MoveV1]> {
        match &self.outcome {
            SearchOutcomeV1::Solved { moves, .. } => Some(moves),
            SearchOutcomeV1::Exhausted { .. } => None,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let outcome = match &self.outcome {
            SearchOutcomeV1::Solved {
                moves,
                goal_node_id,
            } => serde_json::json!({
                "goal_node_id": goal_node_id,
                "moves": moves.iter().map(MoveV1::to_json).collect::<Vec<_>>(),
                "type": "solved",
            }),
            SearchOutcomeV1::Exhausted { reason } => serde_json::json!({
                "reason": reason.as_str(),
                "type": "exhausted",
            }),
        };
        serde_json::json!({
            "adapter_id": self.adapter_id,
            "frontier_high_water": self.frontier_high_water,
            "goal_fingerprint": self.goal_fingerprint.as_str(),
            "heuristic": self.heuristic,
            "outcome": outcome,
            "replay_verified": self.replay_verified,
            "schema_version": SOLVE_REPORT_SCHEMA,
            "scramble": self.scramble.iter().map(MoveV1::to_json).collect::<Vec<_>>(),
            "search_graph_digest": self.search_graph_digest.as_str(),
            "size": self.size,
            "start_facelets_hex": self.start_facelets_hex,
            "start_fingerprint": self.start_fingerprint.as_str(),
            "total_expansions": self.total_expansions,
            "total_nodes_created": self.total_nodes_created,
            "total_reparents": self.total_reparents,
        })
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest over the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SOLVE_REPORT, &bytes))
    }
}

/// A finished run: the report plus the graph it summarizes.
#[derive(Debug)]
pub struct SolveRunV1 {
    pub report: SolveReportV1,
    pub graph: SearchGraphV1,
}

/// Scramble `world`, solve it back to solved, and verify the answer.
///
/// Exhaustion is not an error: the report carries
/// [`SearchOutcomeV1::Exhausted`] with `replay_verified == false`.
///
/// # Errors
///
/// Returns [`RunError`] if the scramble is invalid, the heuristic name or
/// policy is rejected, the search fails, or a returned solution does not
/// replay to the goal.
pub fn run_solve(
    mut world: CubeWorld,
    scramble: &[MoveV1],
    heuristic: &str,
    policy: SearchPolicyV1,
    verbose: bool,
) -> Result<SolveRunV1, RunError> {
    world.scramble(scramble)?;
    let start: CubeStateV1 = world.get_state();
    let goal = world.solved_state();
    let size = world.size();

    info!(
        event = "run_start",
        size,
        heuristic,
        scramble_len = scramble.len(),
    );

    let mut solver = AStarSolver::new(world, heuristic, verbose)?.with_policy(policy)?;
    let result = solver.solve(&goal)?;

    let replay_verified = match &result.outcome {
        SearchOutcomeV1::Solved { moves, .. } => {
            verify_solution(solver.adapter().geometry(), &start, moves, &goal)?;
            true
        }
        SearchOutcomeV1::Exhausted { .. } => false,
    };

    let meta = &result.graph.metadata;
    let report = SolveReportV1 {
        adapter_id: meta.adapter_id.clone(),
        size,
        heuristic: meta.heuristic.clone(),
        scramble: scramble.to_vec(),
        start_facelets_hex: hex::encode(start.facelets()),
        start_fingerprint: state_fingerprint(&start),
        goal_fingerprint: state_fingerprint(&goal),
        outcome: result.outcome.clone(),
        replay_verified,
        total_expansions: meta.total_expansions,
        total_nodes_created: meta.total_nodes_created,
        total_reparents: meta.total_reparents,
        frontier_high_water: meta.frontier_high_water,
        search_graph_digest: result.graph.digest()?,
    };

    info!(
        event = "run_end",
        termination = meta.termination_reason.as_str(),
        solution_length = report.solution().map(<[MoveV1]>::len),
        expansions = report.total_expansions,
        replay_verified,
    );

    Ok(SolveRunV1 {
        report,
        graph: result.graph,
    })
}
