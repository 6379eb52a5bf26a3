//! Decontam Search: minimal-k decontamination search over configuration space.
//!
//! This crate provides the search layer. It depends only on
//! `decontam_kernel`; it does NOT depend on `decontam_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! decontam_kernel  ←  decontam_search  ←  decontam_harness
//! (graph, apply)      (BFS, minimize)     (CLI, translation)
//! ```
//!
//! # Pipeline
//!
//! ```text
//! solve(graph, policy)
//!   → for k in 1..=n: search_level(graph, k)      (ActionEnumerator × apply)
//!   → first Success: reconstruct_path(frontier)
//!   → render_sequence / SolutionReportV1
//! ```
//!
//! # Key types
//!
//! - [`enumerate::ActionEnumerator`]: k-subsets in descending lexicographic order
//! - [`frontier::LevelFrontier`]: per-k queue plus first-discovery records
//! - [`search::LevelResultV1`]: `Success` or `Exhausted` for one k
//! - [`path::DecontaminationSequenceV1`]: the emitted configuration/action sequence
//! - [`report::SolutionReportV1`]: serializable solution with content digest

#![forbid(unsafe_code)]

pub mod enumerate;
pub mod error;
pub mod frontier;
pub mod minimize;
pub mod path;
pub mod policy;
pub mod render;
pub mod report;
pub mod search;
