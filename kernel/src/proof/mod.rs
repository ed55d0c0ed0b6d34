//! Proof module: canonical hashing, canonical JSON, replay verification.
//!
//! Depends on `carrier` and `operators`. Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
pub mod replay;
