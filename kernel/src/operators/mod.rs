//! Operators module: the single `apply_move()` entry point.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod rotate;
