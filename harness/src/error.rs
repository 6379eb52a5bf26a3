//! Harness error type and process exit codes.

use thiserror::Error;

use decontam_kernel::carrier::ingest::IngestError;
use decontam_kernel::proof::replay::GuardInputError;
use decontam_search::error::SearchError;

/// Exit code: success, or checker verdict `OK!`.
pub const EXIT_OK: i32 = 0;
/// Exit code: checker verdict `NO`.
pub const EXIT_VERDICT_NO: i32 = 1;
/// Exit code: unreadable or malformed input, or a rejected configuration.
pub const EXIT_INPUT: i32 = 2;
/// Exit code: the search itself failed.
pub const EXIT_SEARCH: i32 = 3;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("edge stream: {0}")]
    Ingest(#[from] IngestError),

    #[error("search: {0}")]
    Search(#[from] SearchError),

    #[error("guard input: {0}")]
    GuardInput(#[from] GuardInputError),

    #[error("graph has no vertices; there is no guard strategy to emit")]
    NoGuardTranslation,

    #[error("cannot read {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HarnessError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Search(SearchError::InvalidPolicy { .. } | SearchError::CapacityExceeded { .. })
            | Self::Ingest(_)
            | Self::GuardInput(_)
            | Self::NoGuardTranslation
            | Self::Open { .. }
            | Self::Io(_) => EXIT_INPUT,
            Self::Search(_) | Self::Serialize(_) => EXIT_SEARCH,
        }
    }
}
