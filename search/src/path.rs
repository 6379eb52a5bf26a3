//! Path reconstruction from a successful level frontier.
//!
//! Walks discovery records backward from the clean configuration to the root
//! (the only visited configuration without a record), then reverses into
//! chronological order.

use decontam_kernel::carrier::config::{ActionV1, ConfigurationV1};

use crate::error::SearchError;
use crate::frontier::LevelFrontier;

/// One entry of a decontamination sequence.
///
/// `action` is the action that produced `configuration` from the previous
/// step's configuration; it is `None` only for the initial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepV1 {
    pub action: Option<ActionV1>,
    pub configuration: ConfigurationV1,
}

/// The emitted sequence: initial all-ones configuration, then alternating
/// action / resulting configuration up to the all-zeros configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecontaminationSequenceV1 {
    pub vertex_count: usize,
    /// Action size. Zero only for the empty graph.
    pub k: usize,
    pub steps: Vec<StepV1>,
}

impl DecontaminationSequenceV1 {
    /// Sequence for a graph whose initial configuration is already clean
    /// (zero vertices): a single step, zero rounds.
    #[must_use]
    pub fn already_clean(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            k: 0,
            steps: vec![StepV1 {
                action: None,
                configuration: ConfigurationV1::fully_contaminated(vertex_count),
            }],
        }
    }

    /// Number of rounds (actions applied).
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Actions in chronological order.
    pub fn actions(&self) -> impl Iterator<Item = ActionV1> + '_ {
        self.steps.iter().filter_map(|s| s.action)
    }

    /// Configurations in chronological order, initial and final included.
    pub fn configurations(&self) -> impl Iterator<Item = ConfigurationV1> + '_ {
        self.steps.iter().map(|s| s.configuration)
    }
}

/// Rebuild the sequence that first reached the clean configuration.
///
/// # Errors
///
/// Returns [`SearchError::InvariantViolation`] if the clean configuration was
/// never visited, if the walk does not end at the frontier root, or if the
/// walk runs longer than the number of visited configurations.
pub fn reconstruct_path(
    frontier: &LevelFrontier,
    vertex_count: usize,
    k: usize,
) -> Result<DecontaminationSequenceV1, SearchError> {
    if !frontier.is_visited(ConfigurationV1::CLEAN) {
        return Err(SearchError::InvariantViolation {
            detail: "clean configuration was not reached".into(),
        });
    }

    let mut steps = Vec::new();
    let mut current = ConfigurationV1::CLEAN;
    while let Some(discovery) = frontier.discovery(current) {
        if steps.len() >= frontier.visited_count() {
            return Err(SearchError::InvariantViolation {
                detail: "predecessor chain does not terminate".into(),
            });
        }
        steps.push(StepV1 {
            action: Some(discovery.action),
            configuration: current,
        });
        current = discovery.predecessor;
    }
    if current != frontier.root() {
        return Err(SearchError::InvariantViolation {
            detail: format!(
                "predecessor chain ended at {} instead of the root",
                current.render(vertex_count)
            ),
        });
    }
    steps.push(StepV1 {
        action: None,
        configuration: current,
    });
    steps.reverse();

    Ok(DecontaminationSequenceV1 {
        vertex_count,
        k,
        steps,
    })
}
