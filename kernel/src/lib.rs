//! Decontam Kernel: the deterministic core of the decontamination search.
//!
//! # API Surface
//!
//! The kernel exposes three entry points:
//!
//! - [`carrier::ingest::parse_edge_stream`] -- build a `GraphV1` from an edge stream
//! - [`operators::apply::apply`] -- apply an action to a configuration, producing the next configuration
//! - [`proof::replay::replay_guards`] -- replay a guard strategy under the complementary encoding
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. No cycles. `proof` depends on `carrier`.
//! `operators` depends on `carrier`. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
