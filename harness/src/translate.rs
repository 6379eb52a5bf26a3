//! Translation of a decontamination sequence into guard-checker input.
//!
//! ```text
//! N = vertex count      P = k
//! edges = graph edges   L = rounds - 1
//! rows  = the actions, chronological
//! ```
//!
//! The checker's state after round r is the complement of the search
//! configuration after round r, so replaying the translation reports `OK!`
//! exactly at the last round.

use decontam_kernel::carrier::graph::GraphV1;
use decontam_kernel::proof::replay::{GuardInputError, GuardStrategyV1};
use decontam_search::path::DecontaminationSequenceV1;

/// Build the checker strategy for `sequence` on `graph`.
///
/// Returns `Ok(None)` for a zero-round sequence: the checker needs at least
/// one row.
///
/// # Errors
///
/// Returns [`GuardInputError`] if an action does not fit the graph, which
/// means `sequence` was produced for a different graph.
pub fn guard_input(
    graph: &GraphV1,
    sequence: &DecontaminationSequenceV1,
) -> Result<Option<GuardStrategyV1>, GuardInputError> {
    if sequence.rounds() == 0 {
        return Ok(None);
    }
    let rows = sequence
        .actions()
        .map(|action| action.vertices().collect())
        .collect();
    GuardStrategyV1::new(graph.clone(), sequence.k, rows).map(Some)
}
