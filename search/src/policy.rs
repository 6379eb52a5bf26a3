//! Search policy types.

use decontam_kernel::carrier::config::MAX_VERTICES;

use crate::error::SearchError;

/// Capacity and memory bounds for a search run.
///
/// Neither bound ever truncates the search: crossing one is a fatal
/// [`SearchError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Largest accepted vertex count. Must be in `1..=MAX_VERTICES`.
    pub max_vertices: usize,
    /// Upper bound on visited configurations per k attempt (root included).
    /// `None` means unbounded.
    pub max_configurations: Option<u64>,
}

impl SearchPolicyV1 {
    /// Pre-flight check of the policy itself.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_vertices` is 0 or above
    /// `MAX_VERTICES`, or if `max_configurations` is `Some(0)`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_vertices == 0 || self.max_vertices > MAX_VERTICES {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "max_vertices must be in 1..={MAX_VERTICES}, got {}",
                    self.max_vertices
                ),
            });
        }
        if self.max_configurations == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_configurations must be positive".into(),
            });
        }
        Ok(())
    }

    /// Fail fast if `vertex_count` exceeds the capacity bound.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::CapacityExceeded`].
    pub fn check_capacity(&self, vertex_count: usize) -> Result<(), SearchError> {
        if vertex_count > self.max_vertices {
            return Err(SearchError::CapacityExceeded {
                vertex_count,
                max: self.max_vertices,
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
            max_configurations: None,
        }
    }
}
