//! Operators module: the transition function.
//!
//! Depends on `carrier` only.

pub mod apply;
