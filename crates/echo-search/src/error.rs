//! Store-facing error types.

use thiserror::Error;

/// Errors surfaced by a [`DocumentStore`](crate::store::DocumentStore)
/// implementation.
///
/// `QueryExecution` is the characteristic recoverable failure: the store
/// rejected the compiled predicate. The executor absorbs it into an empty
/// result. `Connectivity` is outside this layer's recovery policy and
/// propagates to the caller untouched; no retry or backoff is attempted.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the compiled predicate (malformed pattern or an
    /// operator the collection cannot evaluate).
    #[error("query rejected by store: {0}")]
    QueryExecution(String),

    /// The store could not be reached or the operation did not complete.
    #[error("store unreachable: {0}")]
    Connectivity(String),
}

impl StoreError {
    /// True for the failure class the executor absorbs locally.
    pub fn is_query_rejection(&self) -> bool {
        matches!(self, StoreError::QueryExecution(_))
    }
}
