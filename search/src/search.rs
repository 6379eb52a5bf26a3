//! Level search: breadth-first exploration of configurations for one k.
//!
//! ```text
//! root = all-ones; frontier = [root]
//! loop:
//!   c = pop()            (queue empty → Exhausted)
//!   c == all-zeros       → Success
//!   for a in ActionEnumerator(n, k):
//!     nc = apply(c, a)
//!     first time nc seen → record(nc, c, a), enqueue
//! ```
//!
//! Termination is checked at dequeue time, so the clean configuration is
//! reached at the minimum BFS depth achievable with actions of size k.

use serde::Serialize;
use tracing::trace;

use decontam_kernel::carrier::config::ConfigurationV1;
use decontam_kernel::carrier::graph::GraphV1;
use decontam_kernel::operators::apply::apply;

use crate::enumerate::ActionEnumerator;
use crate::error::SearchError;
use crate::frontier::LevelFrontier;
use crate::policy::SearchPolicyV1;

/// Counters for one k attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelStatsV1 {
    /// Configurations dequeued and expanded (the terminal pop excluded).
    pub expansions: u64,
    /// Candidate actions applied across all expansions.
    pub actions_applied: u64,
    /// Visited configurations at termination, root included.
    pub configurations_discovered: u64,
    /// Applied actions whose result had already been visited.
    pub duplicates_suppressed: u64,
    /// Largest queue length observed.
    pub frontier_high_water: u64,
}

/// Outcome of one k attempt.
#[derive(Debug)]
pub enum LevelResultV1 {
    /// The clean configuration was dequeued. The frontier is handed to path
    /// reconstruction.
    Success {
        frontier: LevelFrontier,
        stats: LevelStatsV1,
    },
    /// The queue emptied without reaching the clean configuration.
    Exhausted { stats: LevelStatsV1 },
}

impl LevelResultV1 {
    /// Returns `true` for [`LevelResultV1::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The attempt's counters.
    #[must_use]
    pub fn stats(&self) -> &LevelStatsV1 {
        match self {
            Self::Success { stats, .. } | Self::Exhausted { stats } => stats,
        }
    }
}

/// Run breadth-first search with action size `k` from the fully contaminated
/// configuration.
///
/// # Errors
///
/// Returns [`SearchError::ConfigurationBudgetExceeded`] if the visited set
/// would grow past `policy.max_configurations`.
pub fn search_level(
    graph: &GraphV1,
    k: usize,
    policy: &SearchPolicyV1,
) -> Result<LevelResultV1, SearchError> {
    let n = graph.vertex_count();
    let mut frontier = LevelFrontier::new(ConfigurationV1::fully_contaminated(n));
    let mut stats = LevelStatsV1::default();

    while let Some(current) = frontier.pop() {
        if current.is_clean() {
            stats.configurations_discovered = frontier.visited_count() as u64;
            stats.frontier_high_water = frontier.high_water();
            return Ok(LevelResultV1::Success { frontier, stats });
        }

        for action in ActionEnumerator::new(n, k) {
            let next = apply(graph, current, action);
            stats.actions_applied += 1;
            if frontier.is_visited(next) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            if let Some(limit) = policy.max_configurations {
                if frontier.visited_count() as u64 >= limit {
                    return Err(SearchError::ConfigurationBudgetExceeded { k, limit });
                }
            }
            frontier.record(next, current, action);
        }
        stats.expansions += 1;
        trace!(
            k,
            configuration = %current.render(n),
            visited = frontier.visited_count(),
            queued = frontier.len(),
            "expanded configuration"
        );
    }

    stats.configurations_discovered = frontier.visited_count() as u64;
    stats.frontier_high_water = frontier.high_water();
    Ok(LevelResultV1::Exhausted { stats })
}
