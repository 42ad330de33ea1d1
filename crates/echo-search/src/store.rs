//! The consumed document-store interface, plus an in-memory reference
//! implementation used by tests.
//!
//! The store is an external collaborator: this layer only ever counts and
//! fetches documents for a compiled predicate. Documents cross the seam as
//! raw JSON values; decoding into typed records happens in the executor.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use echo_query::Predicate;
use serde_json::Value;

use crate::error::StoreError;

/// Read-only query interface every backing store must expose.
///
/// Both methods must accept and reject identical predicates; the executor
/// relies on that symmetry when it joins a concurrent count and fetch.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Count documents in `collection` matching `predicate`.
    async fn count_matching(
        &self,
        collection: &str,
        predicate: &Predicate,
    ) -> Result<u64, StoreError>;

    /// Fetch documents matching `predicate` in the store's natural order,
    /// bypassing `skip` documents and returning at most `limit`.
    async fn find_matching(
        &self,
        collection: &str,
        predicate: &Predicate,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Value>, StoreError>;
}

/// Which injected failure a [`MemoryStore`] operation should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InjectedFailure {
    QueryRejected,
    Unreachable,
}

/// In-memory store evaluating predicates against JSON documents.
///
/// Field paths use dotted notation; a path segment applied to an array
/// fans out over its elements, so `comments.username` matches when any
/// comment was left by the handle. Failures can be injected per operation
/// and every issued call is counted, which lets tests assert that a `None`
/// predicate never reaches the store.
#[derive(Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Value>>,
    count_failure: Option<InjectedFailure>,
    find_failure: Option<InjectedFailure>,
    calls: AtomicU64,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with documents.
    pub fn with_documents(mut self, collection: &str, documents: Vec<Value>) -> Self {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        self
    }

    /// Reject every predicate, on both operations.
    pub fn with_query_rejection(self) -> Self {
        self.with_count_rejection().with_find_rejection()
    }

    /// Reject predicates on `count_matching` only.
    pub fn with_count_rejection(mut self) -> Self {
        self.count_failure = Some(InjectedFailure::QueryRejected);
        self
    }

    /// Reject predicates on `find_matching` only.
    pub fn with_find_rejection(mut self) -> Self {
        self.find_failure = Some(InjectedFailure::QueryRejected);
        self
    }

    /// Fail both operations as unreachable.
    pub fn with_unreachable(mut self) -> Self {
        self.count_failure = Some(InjectedFailure::Unreachable);
        self.find_failure = Some(InjectedFailure::Unreachable);
        self
    }

    /// Number of store operations issued so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    fn documents(&self, collection: &str) -> &[Value] {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn raise(failure: InjectedFailure) -> StoreError {
        match failure {
            InjectedFailure::QueryRejected => {
                StoreError::QueryExecution("injected: predicate rejected".to_string())
            }
            InjectedFailure::Unreachable => {
                StoreError::Connectivity("injected: store unreachable".to_string())
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count_matching(
        &self,
        collection: &str,
        predicate: &Predicate,
    ) -> Result<u64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.count_failure {
            return Err(Self::raise(failure));
        }
        let total = self
            .documents(collection)
            .iter()
            .filter(|doc| matches(predicate, doc))
            .count() as u64;
        Ok(total)
    }

    async fn find_matching(
        &self,
        collection: &str,
        predicate: &Predicate,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.find_failure {
            return Err(Self::raise(failure));
        }
        let documents = self
            .documents(collection)
            .iter()
            .filter(|doc| matches(predicate, doc))
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(documents)
    }
}

/// Evaluate a predicate against one document.
fn matches(predicate: &Predicate, doc: &Value) -> bool {
    match predicate {
        Predicate::FieldMatch { field, pattern, .. } => resolve(doc, field)
            .iter()
            .any(|value| value.as_str().is_some_and(|s| pattern.is_match(s))),
        Predicate::FieldEquals { field, value } => resolve(doc, field)
            .iter()
            .any(|found| found.as_str() == Some(value.as_str())),
        Predicate::Or(children) => children.iter().any(|child| matches(child, doc)),
        Predicate::And(children) => children.iter().all(|child| matches(child, doc)),
    }
}

/// Resolve a dotted field path, fanning out over array elements.
fn resolve<'a>(doc: &'a Value, path: &str) -> Vec<&'a Value> {
    let mut current = vec![doc];
    for segment in path.split('.') {
        let mut next = Vec::new();
        for value in current {
            match value {
                Value::Object(map) => {
                    if let Some(child) = map.get(segment) {
                        next.push(child);
                    }
                }
                Value::Array(items) => {
                    for item in items {
                        if let Some(child) = item.get(segment) {
                            next.push(child);
                        }
                    }
                }
                _ => {}
            }
        }
        current = next;
    }
    current
}
