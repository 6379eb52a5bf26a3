//! Typed search errors.
//!
//! `SearchError` is fatal for the run: there is no partial result. An
//! exhausted frontier for a single k is NOT an error; it is
//! [`crate::search::LevelResultV1::Exhausted`] and the minimization loop moves
//! on to the next k.

use thiserror::Error;

/// Typed failure of a search run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The graph has more vertices than the policy capacity bound.
    #[error("graph has {vertex_count} vertices; the supported maximum is {max}")]
    CapacityExceeded { vertex_count: usize, max: usize },
    /// The visited set for one k grew past `max_configurations`.
    #[error("k={k}: visited configurations exceeded the budget of {limit}")]
    ConfigurationBudgetExceeded { k: usize, limit: u64 },
    /// The policy itself is unusable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// An internal bookkeeping invariant did not hold.
    #[error("search invariant violated: {detail}")]
    InvariantViolation { detail: String },
}
