//! Minimization loop: smallest k whose level search reaches the clean
//! configuration.
//!
//! k runs upward from 1 and stops at the first success, so the reported k is
//! minimal by construction. k = n always succeeds in one round (the full-set
//! action leaves no propagation source), which bounds the loop.

use tracing::{debug, info};

use decontam_kernel::carrier::graph::GraphV1;

use crate::error::SearchError;
use crate::path::{reconstruct_path, DecontaminationSequenceV1};
use crate::policy::SearchPolicyV1;
use crate::search::{search_level, LevelResultV1, LevelStatsV1};

/// Outcome of a single k attempt as recorded in the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcomeV1 {
    Success,
    Exhausted,
}

/// Record of one k attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptV1 {
    pub k: usize,
    pub outcome: AttemptOutcomeV1,
    pub stats: LevelStatsV1,
}

/// A minimal-k decontamination sequence plus the attempts that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionV1 {
    pub sequence: DecontaminationSequenceV1,
    /// One entry per k tried, ascending; only the last is a success.
    pub attempts: Vec<AttemptV1>,
}

impl SolutionV1 {
    /// The minimal action size.
    #[must_use]
    pub fn k(&self) -> usize {
        self.sequence.k
    }

    /// Number of rounds in the emitted sequence.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.sequence.rounds()
    }
}

/// Find the minimal k and its decontamination sequence.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation.
/// - [`SearchError::CapacityExceeded`] if the graph is larger than
///   `policy.max_vertices`.
/// - [`SearchError::ConfigurationBudgetExceeded`] from any attempt.
/// - [`SearchError::InvariantViolation`] if bookkeeping is inconsistent
///   (including k = n failing, which cannot happen for a well-formed graph).
pub fn solve(graph: &GraphV1, policy: &SearchPolicyV1) -> Result<SolutionV1, SearchError> {
    policy.validate()?;
    let n = graph.vertex_count();
    policy.check_capacity(n)?;

    if n == 0 {
        info!("empty graph is clean from the start");
        return Ok(SolutionV1 {
            sequence: DecontaminationSequenceV1::already_clean(0),
            attempts: Vec::new(),
        });
    }

    let mut attempts = Vec::new();
    for k in 1..=n {
        debug!(k, vertices = n, "starting level search");
        match search_level(graph, k, policy)? {
            LevelResultV1::Success { frontier, stats } => {
                let sequence = reconstruct_path(&frontier, n, k)?;
                info!(
                    k,
                    rounds = sequence.rounds(),
                    visited = stats.configurations_discovered,
                    expansions = stats.expansions,
                    "minimal k found"
                );
                attempts.push(AttemptV1 {
                    k,
                    outcome: AttemptOutcomeV1::Success,
                    stats,
                });
                return Ok(SolutionV1 { sequence, attempts });
            }
            LevelResultV1::Exhausted { stats } => {
                info!(
                    k,
                    visited = stats.configurations_discovered,
                    expansions = stats.expansions,
                    "frontier exhausted"
                );
                attempts.push(AttemptV1 {
                    k,
                    outcome: AttemptOutcomeV1::Exhausted,
                    stats,
                });
            }
        }
    }

    Err(SearchError::InvariantViolation {
        detail: format!("no k in 1..={n} reached the clean configuration"),
    })
}
