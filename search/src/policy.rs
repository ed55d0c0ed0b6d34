//! Search policy types.

use crate::error::SearchError;

/// Search budgets and recording options.
///
/// The reference behaviour is unbounded: both budgets default to `None`.
/// Callers wanting a bounded search set a cap here rather than wrapping the
/// engine; hitting a cap ends the search as `Exhausted`, never as an empty
/// success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions.
    pub max_expansions: Option<u64>,
    /// Hard cap on open nodes after an expansion.
    pub max_frontier_size: Option<u64>,
    /// Record one `ExpandEventV1` per expansion in the graph. Counters are
    /// kept either way.
    pub record_expansions: bool,
}

impl SearchPolicyV1 {
    /// Validate budget values.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a budget is `Some(0)`, which
    /// would end every search before the root is examined.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_frontier_size == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo of the policy for graph metadata.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "max_frontier_size": self.max_frontier_size,
            "record_expansions": self.record_expansions,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_frontier_size: None,
            record_expansions: true,
        }
    }
}
