//! Cubestar Search: A* best-first search over a pluggable puzzle adapter.
//!
//! This crate provides the search layer. It depends only on
//! `cubestar_kernel` (move triples, hashing, canonical JSON). It does NOT
//! depend on `cubestar_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! cubestar_kernel  ←  cubestar_search  ←  cubestar_harness
//! (cube carrier)      (frontier, nodes)    (cube world, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`StateAdapterV1`](contract::StateAdapterV1) -- trait for puzzles that support search
//! - [`SearchNodeV1`](node::SearchNodeV1) -- state node with mutable cost and re-parenting
//! - [`HeuristicKindV1`](heuristic::HeuristicKindV1) -- closed set of named heuristics
//! - [`MoveGeneratorV1`](moves::MoveGeneratorV1) -- successor enumeration
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier) / [`VisitedRegistryV1`](registry::VisitedRegistryV1)
//! - [`AStarSolver`](search::AStarSolver) -- the search engine
//! - [`SearchGraphV1`](graph::SearchGraphV1) -- expansion audit log

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod moves;
pub mod node;
pub mod policy;
pub mod registry;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;
