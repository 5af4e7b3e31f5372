//! Search backend contract.
//!
//! A backend executes a [`QueryPlan`] with a [`SortSpec`] and serves
//! completion suggestions over the one-line address. Calls are read-only
//! and idempotent, so callers may retry them freely.

use address_lookup_models::AddressHit;
use async_trait::async_trait;

use crate::plan::{QueryPlan, SortSpec};

/// Errors a search backend can report.
///
/// A backend failure is always surfaced as one of these; it is never
/// reported as an empty result set.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend cannot be reached or its index is not loaded.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed to execute the query.
    #[error("Query failed: {0}")]
    Query(String),

    /// I/O error while reading the index.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl BackendError {
    /// Returns `true` if retrying the same call may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Io(_))
    }
}

/// Trait that every search backend implements.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs a structured field search.
    ///
    /// Hits are ordered by `sort` among the best-scoring candidates and
    /// truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the backend is unavailable or the
    /// query fails.
    async fn search(
        &self,
        plan: &QueryPlan,
        sort: &SortSpec,
        limit: usize,
    ) -> Result<Vec<AddressHit>, BackendError>;

    /// Returns up to `limit` completions whose one-line address starts
    /// with `prefix`, best first.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the backend is unavailable or the
    /// query fails.
    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<AddressHit>, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_transient_errors() {
        assert!(BackendError::Unavailable("down".to_string()).is_transient());
        assert!(BackendError::Io(std::io::Error::other("disk")).is_transient());
        assert!(!BackendError::Query("bad".to_string()).is_transient());
        assert!(!BackendError::Other("x".to_string()).is_transient());
    }
}
