//! `SolutionReportV1`: the serializable form of a solution.
//!
//! Field order is fixed by the struct definitions, so `to_json_bytes` is
//! byte-stable for identical input and [`SolutionReportV1::digest`] can serve
//! as a determinism fingerprint.

use serde::Serialize;

use decontam_kernel::carrier::graph::GraphV1;
use decontam_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SOLUTION_REPORT};

use crate::minimize::{AttemptOutcomeV1, SolutionV1};
use crate::search::LevelStatsV1;

/// Schema identifier written into every report.
pub const SOLUTION_SCHEMA_VERSION: &str = "decontam.solution.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionReportV1 {
    pub schema_version: &'static str,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub k: usize,
    pub rounds: usize,
    pub steps: Vec<ReportStepV1>,
    pub attempts: Vec<ReportAttemptV1>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStepV1 {
    /// Ascending vertex indices; absent for the initial configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Vec<usize>>,
    /// Bit string, vertex 0 first, `'1'` = contaminated.
    pub configuration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportAttemptV1 {
    pub k: usize,
    pub outcome: ReportOutcomeV1,
    #[serde(flatten)]
    pub stats: LevelStatsV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcomeV1 {
    Success,
    Exhausted,
}

impl From<AttemptOutcomeV1> for ReportOutcomeV1 {
    fn from(outcome: AttemptOutcomeV1) -> Self {
        match outcome {
            AttemptOutcomeV1::Success => Self::Success,
            AttemptOutcomeV1::Exhausted => Self::Exhausted,
        }
    }
}

impl SolutionReportV1 {
    /// Build the report for `solution` found on `graph`.
    #[must_use]
    pub fn new(graph: &GraphV1, solution: &SolutionV1) -> Self {
        let sequence = &solution.sequence;
        let steps = sequence
            .steps
            .iter()
            .map(|step| ReportStepV1 {
                action: step.action.map(|a| a.vertices().collect()),
                configuration: step.configuration.render(sequence.vertex_count),
            })
            .collect();
        let attempts = solution
            .attempts
            .iter()
            .map(|a| ReportAttemptV1 {
                k: a.k,
                outcome: a.outcome.into(),
                stats: a.stats,
            })
            .collect();
        Self {
            schema_version: SOLUTION_SCHEMA_VERSION,
            vertex_count: sequence.vertex_count,
            edge_count: graph.edge_count(),
            k: sequence.k,
            rounds: sequence.rounds(),
            steps,
            attempts,
        }
    }

    /// Compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Content hash of [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(DOMAIN_SOLUTION_REPORT, &self.to_json_bytes()?))
    }
}
