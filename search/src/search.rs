//! Search entry point and expansion loop.
//!
//! # State machine
//!
//! `INITIALIZED → RUNNING → {GOAL_FOUND | EXHAUSTED}`
//!
//! - INITIALIZED: the root node (`g = 0`, `h = estimate(start, goal)`) is
//!   registered and opened.
//! - RUNNING: withdraw the best open node. If its state equals the goal, the
//!   path is rebuilt from parent links. Otherwise every successor is either
//!   inserted as a new node or offered to the existing node as a cheaper
//!   parent; the candidate state itself is then dropped.
//! - EXHAUSTED: the frontier emptied (or a policy budget was hit) before the
//!   goal was withdrawn. Reported through [`SearchOutcomeV1::Exhausted`],
//!   never as an empty move list.
//!
//! Every `solve` call owns a fresh frontier, registry and node arena.

use cubestar_kernel::carrier::moves::MoveV1;
use tracing::{debug, info, warn};

use crate::contract::StateAdapterV1;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::graph::{
    CandidateOutcomeV1, CandidateRecordV1, ExpandEventV1, FrontierPopKeyV1, SearchGraphMetadata,
    SearchGraphV1, TerminationReasonV1,
};
use crate::heuristic::HeuristicKindV1;
use crate::moves::MoveGeneratorV1;
use crate::node::SearchNodeV1;
use crate::policy::SearchPolicyV1;
use crate::registry::{state_fingerprint, VisitedRegistryV1};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcomeV1 {
    /// The goal was withdrawn from the frontier. `moves` is in execution
    /// order and is empty when the start already equals the goal.
    Solved { moves: Vec<MoveV1>, goal_node_id: u64 },
    /// The search stopped without reaching the goal.
    Exhausted { reason: TerminationReasonV1 },
}

/// Result of a search execution.
///
/// Always contains a complete `SearchGraphV1` audit trail regardless of how
/// the search terminated.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// Success/failure discriminator.
    pub outcome: SearchOutcomeV1,
    /// The complete search graph audit trail.
    pub graph: SearchGraphV1,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNodeV1<S>>,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because the goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.outcome, SearchOutcomeV1::Solved { .. })
    }

    /// The solution moves, or `None` if the search was exhausted.
    #[must_use]
    pub fn moves(&self) -> Option<&[MoveV1]> {
        match &self.outcome {
            SearchOutcomeV1::Solved { moves, .. } => Some(moves),
            SearchOutcomeV1::Exhausted { .. } => None,
        }
    }

    /// Consume the result into its move list.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchExhausted`] if the goal was not reached.
    pub fn into_moves(self) -> Result<Vec<MoveV1>, SearchError> {
        match self.outcome {
            SearchOutcomeV1::Solved { moves, .. } => Ok(moves),
            SearchOutcomeV1::Exhausted { reason } => Err(SearchError::SearchExhausted {
                reason,
                expansions: self.graph.metadata.total_expansions,
            }),
        }
    }
}

/// Walk parent links from `goal_id` to the root and return the producing
/// moves in execution order (root first).
#[must_use]
pub fn reconstruct_path<S>(nodes: &[SearchNodeV1<S>], goal_id: u64) -> Vec<MoveV1> {
    let mut moves = Vec::new();
    let mut cursor = Some(goal_id);
    while let Some(id) = cursor {
        let Some(node) = nodes.get(slot(id)) else {
            break;
        };
        if let Some(mv) = node.producing_move {
            moves.push(mv);
        }
        cursor = node.parent_id;
    }
    moves.reverse();
    moves
}

#[allow(clippy::cast_possible_truncation)]
fn slot(node_id: u64) -> usize {
    node_id as usize
}

/// A* solver over a puzzle adapter.
///
/// Constructed with an adapter positioned at the start configuration. The
/// heuristic name is validated here; an unknown name never reaches `solve`.
pub struct AStarSolver<A: StateAdapterV1> {
    adapter: A,
    heuristic: HeuristicKindV1,
    verbose: bool,
    policy: SearchPolicyV1,
    generator: MoveGeneratorV1,
}

impl<A: StateAdapterV1> AStarSolver<A> {
    /// Build a solver with the full move generator and the default
    /// (unbounded) policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHeuristicName`] if `heuristic_name` is
    /// not `"manhattan"` or `"euclidean"`.
    pub fn new(adapter: A, heuristic_name: &str, verbose: bool) -> Result<Self, SearchError> {
        let heuristic: HeuristicKindV1 = heuristic_name.parse()?;
        if !heuristic.is_production_valid() {
            warn!(
                event = "heuristic_reference_only",
                heuristic = heuristic.name(),
            );
        }
        let generator = MoveGeneratorV1::full(adapter.size());
        Ok(Self {
            adapter,
            heuristic,
            verbose,
            policy: SearchPolicyV1::default(),
            generator,
        })
    }

    /// Replace the search policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn with_policy(mut self, policy: SearchPolicyV1) -> Result<Self, SearchError> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
    }

    /// Replace the move generator, e.g. with a restricted move set.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AdapterFailure`] if the generator was built for
    /// a different puzzle size than the adapter.
    pub fn with_generator(mut self, generator: MoveGeneratorV1) -> Result<Self, SearchError> {
        if generator.size() != self.adapter.size() {
            return Err(SearchError::AdapterFailure {
                detail: format!(
                    "move generator built for size {}, adapter has size {}",
                    generator.size(),
                    self.adapter.size()
                ),
            });
        }
        self.generator = generator;
        Ok(self)
    }

    /// The selected heuristic.
    #[must_use]
    pub fn heuristic(&self) -> HeuristicKindV1 {
        self.heuristic
    }

    /// The active policy.
    #[must_use]
    pub fn policy(&self) -> &SearchPolicyV1 {
        &self.policy
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Solve toward the adapter's freshly built solved configuration.
    ///
    /// # Errors
    ///
    /// See [`AStarSolver::solve`].
    pub fn solve_to_solved(&mut self) -> Result<SearchResult<A::State>, SearchError> {
        let goal = self.adapter.solved_state();
        self.solve(&goal)
    }

    /// Run A* from the adapter's current state to `goal`.
    ///
    /// The adapter's working state is restored to the start afterwards, on
    /// success and on error alike. Exhaustion is `Ok` with
    /// [`SearchOutcomeV1::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for an invalid policy, or
    /// [`SearchError::MalformedMove`] / [`SearchError::AdapterFailure`] if the
    /// adapter rejects a generated move.
    pub fn solve(&mut self, goal: &A::State) -> Result<SearchResult<A::State>, SearchError> {
        self.policy.validate()?;
        let start = self.adapter.get_state();
        let result = self.run(&start, goal);
        self.adapter.set_state(start);
        result
    }

    #[allow(clippy::too_many_lines)]
    fn run(
        &mut self,
        start: &A::State,
        goal: &A::State,
    ) -> Result<SearchResult<A::State>, SearchError> {
        let profile = self.adapter.heuristic_profile();
        let goal_elements = self.adapter.elements(goal).to_vec();

        let mut frontier = BestFirstFrontier::new();
        let mut registry = VisitedRegistryV1::new();
        let mut nodes: Vec<SearchNodeV1<A::State>> = Vec::new();
        let mut expansions: Vec<ExpandEventV1> = Vec::new();
        let mut expansion_count: u64 = 0;
        let mut total_candidates_generated: u64 = 0;
        let mut total_duplicates_kept: u64 = 0;
        let mut total_reparents: u64 = 0;

        // INITIALIZED
        let root_fp = state_fingerprint(&self.adapter, start);
        let goal_fp = state_fingerprint(&self.adapter, goal);
        let root_h = self
            .heuristic
            .estimate(self.adapter.elements(start), &goal_elements, &profile);
        let root = SearchNodeV1::create(0, start.clone(), root_fp.clone(), None, root_h, None);
        registry.insert(root_fp.clone(), 0);
        frontier.push(root.frontier_key());
        nodes.push(root);

        debug!(
            event = "solve_start",
            adapter = self.adapter.adapter_id(),
            heuristic = self.heuristic.name(),
            moves_per_expansion = self.generator.moves().len(),
            root_h,
        );

        // RUNNING
        let termination_reason = loop {
            let Some(key) = frontier.pop() else {
                break TerminationReasonV1::FrontierExhausted;
            };
            let current = &nodes[slot(key.node_id)];
            if current.state == *goal {
                break TerminationReasonV1::GoalReached {
                    node_id: key.node_id,
                };
            }
            if self
                .policy
                .max_expansions
                .is_some_and(|max| expansion_count >= max)
            {
                break TerminationReasonV1::ExpansionBudgetExceeded;
            }

            let parent = current.link();
            let parent_state = current.state.clone();
            let parent_fp_hex = current.state_fingerprint.hex_digest().to_string();

            let successors = self.generator.successors(&mut self.adapter, &parent_state)?;
            total_candidates_generated += successors.len() as u64;

            let mut candidates = Vec::with_capacity(successors.len());
            for (index, (state, mv)) in successors.into_iter().enumerate() {
                let fp = state_fingerprint(&self.adapter, &state);
                let outcome = if let Some(existing) = registry.lookup(&fp) {
                    let node = &mut nodes[slot(existing)];
                    if let Some(change) = node.try_reparent(parent, mv) {
                        total_reparents += 1;
                        let requeued = frontier.contains(existing);
                        if requeued {
                            frontier.push(node.frontier_key());
                        }
                        if self.verbose {
                            info!(
                                event = "reparent",
                                node_id = existing,
                                new_parent = parent.node_id,
                                previous_f = change.previous_f,
                                new_f = change.new_f,
                                requeued,
                            );
                        }
                        CandidateOutcomeV1::Reparented {
                            node_id: existing,
                            previous_f: change.previous_f,
                            new_f: change.new_f,
                            requeued,
                        }
                    } else {
                        total_duplicates_kept += 1;
                        CandidateOutcomeV1::DuplicateKept { node_id: existing }
                    }
                } else {
                    let node_id = nodes.len() as u64;
                    let h = self.heuristic.estimate(
                        self.adapter.elements(&state),
                        &goal_elements,
                        &profile,
                    );
                    let child =
                        SearchNodeV1::create(node_id, state, fp.clone(), Some(parent), h, Some(mv));
                    registry.insert(fp, node_id);
                    frontier.push(child.frontier_key());
                    nodes.push(child);
                    CandidateOutcomeV1::Inserted { to_node: node_id }
                };
                candidates.push(CandidateRecordV1 {
                    index: index as u64,
                    mv,
                    outcome,
                });
            }

            if self.verbose {
                info!(
                    event = "expand",
                    expansion = expansion_count,
                    node_id = key.node_id,
                    g = parent.g_cost,
                    h = key.h_cost,
                    f = key.f_cost,
                    open = frontier.len(),
                    seen = registry.len(),
                );
            }
            if self.policy.record_expansions {
                expansions.push(ExpandEventV1 {
                    expansion_order: expansion_count,
                    node_id: key.node_id,
                    state_fingerprint: parent_fp_hex,
                    frontier_pop_key: FrontierPopKeyV1 {
                        f_cost: key.f_cost,
                        h_cost: key.h_cost,
                        node_id: key.node_id,
                    },
                    g_cost: parent.g_cost,
                    candidates,
                });
            }
            expansion_count += 1;

            if self
                .policy
                .max_frontier_size
                .is_some_and(|max| frontier.len() as u64 > max)
            {
                break TerminationReasonV1::FrontierBudgetExceeded;
            }
        };

        // GOAL_FOUND | EXHAUSTED
        let outcome = match termination_reason {
            TerminationReasonV1::GoalReached { node_id } => SearchOutcomeV1::Solved {
                moves: reconstruct_path(&nodes, node_id),
                goal_node_id: node_id,
            },
            ref reason => SearchOutcomeV1::Exhausted {
                reason: reason.clone(),
            },
        };
        let solution_length = match &outcome {
            SearchOutcomeV1::Solved { moves, .. } => Some(moves.len() as u64),
            SearchOutcomeV1::Exhausted { .. } => None,
        };

        debug!(
            event = "solve_end",
            termination = termination_reason.as_str(),
            expansions = expansion_count,
            nodes = nodes.len(),
            solution_length,
        );

        let graph = SearchGraphV1 {
            expansions,
            metadata: SearchGraphMetadata {
                adapter_id: self.adapter.adapter_id().to_string(),
                heuristic: self.heuristic.name().to_string(),
                root_state_fingerprint: root_fp.hex_digest().to_string(),
                goal_state_fingerprint: goal_fp.hex_digest().to_string(),
                policy: self.policy.to_json(),
                total_expansions: expansion_count,
                total_candidates_generated,
                total_nodes_created: nodes.len() as u64,
                total_duplicates_kept,
                total_reparents,
                frontier_high_water: frontier.high_water(),
                registry_size: registry.len() as u64,
                termination_reason,
                solution_length,
            },
        };

        Ok(SearchResult {
            outcome,
            graph,
            nodes,
        })
    }
}
