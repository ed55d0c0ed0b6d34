//! Cubestar Kernel: the deterministic cube carrier beneath the search.
//!
//! # API Surface
//!
//! The kernel exposes three entry points:
//!
//! - [`carrier::geometry::CubeGeometryV1`] -- sticker layout and move permutation tables
//! - [`operators::rotate::apply_move`] -- apply one move to a `CubeStateV1`, producing a new state
//! - [`proof::replay::verify_solution`] -- verify a move sequence by deterministic replay
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. No cycles. `proof` depends on `operators` and `carrier`.
//! `operators` depends on `carrier`. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
