//! Decontam harness: orchestration around the kernel and search crates.
//!
//! The harness reads input, runs the minimization loop or the guard checker,
//! and renders the result. It does NOT implement search or replay logic; it
//! delegates to `decontam-search` and `decontam-kernel`.
//!
//! The `decontam` binary (`src/main.rs`) is a thin clap front end over
//! [`runner`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod runner;
pub mod translate;
