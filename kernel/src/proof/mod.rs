//! Proof module: canonical hashing and independent guard replay.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod hash;
pub mod replay;
