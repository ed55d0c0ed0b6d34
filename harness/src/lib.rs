//! Cubestar Harness: concrete puzzle worlds and solve orchestration.
//!
//! The harness positions a world at a scrambled configuration, drives the
//! search engine toward a freshly built solved state, replay-verifies the
//! returned moves with the kernel, and packages the run as a report that can
//! be persisted and re-verified from disk.
//!
//! The harness does NOT implement search or move mechanics. It delegates to
//! `cubestar_search` and `cubestar_kernel`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report_dir;
pub mod runner;
pub mod worlds;
