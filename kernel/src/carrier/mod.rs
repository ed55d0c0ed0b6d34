//! Carrier module: cube state, move triples, and sticker geometry.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod cube_state;
pub mod geometry;
pub mod moves;
