//! Runner-supplied policy overrides.

use decontam_search::policy::SearchPolicyV1;

/// Policy configuration that can override [`SearchPolicyV1`] defaults.
///
/// Populated from CLI flags or their environment variables; tests build it
/// directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Vertex capacity. `None` uses the default (64).
    pub max_vertices: Option<usize>,
    /// Visited-configuration budget per k attempt. `None` is unbounded.
    pub max_configurations: Option<u64>,
}

impl PolicyConfig {
    /// Resolve into a search policy. Validation happens in the search crate.
    #[must_use]
    pub fn to_policy(&self) -> SearchPolicyV1 {
        let defaults = SearchPolicyV1::default();
        SearchPolicyV1 {
            max_vertices: self.max_vertices.unwrap_or(defaults.max_vertices),
            max_configurations: self.max_configurations.or(defaults.max_configurations),
        }
    }
}
