//! Paginated search execution: concurrent count + fetch over one predicate.

use std::sync::Arc;

use echo_query::Predicate;
use futures::future;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::StoreError;
use crate::page;
use crate::store::DocumentStore;

/// One page of search results plus the total page count.
///
/// `page_count == 0` is the terminal "nothing to search for" / "degraded"
/// value; a search that ran and found nothing reports `page_count == 1`
/// with no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage<T> {
    /// Total number of pages for the query
    pub page_count: u64,

    /// Matching records in the store's natural order, at most one page
    pub items: Vec<T>,
}

impl<T> SearchPage<T> {
    /// The terminal empty page: no query was run, or the store rejected it.
    pub fn empty() -> Self {
        Self {
            page_count: 0,
            items: Vec::new(),
        }
    }

    /// True when at least one record was returned.
    pub fn has_results(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Executes one compiled predicate against a store with pagination.
///
/// The count and the fetch for a page are independent read-only operations
/// over the same immutable predicate, so they run concurrently. Both are
/// always driven to completion before either outcome is inspected; there is
/// no cancellation, no retry, and no timeout at this layer.
pub struct SearchExecutor<S> {
    store: Arc<S>,
    config: SearchConfig,
}

impl<S: DocumentStore> SearchExecutor<S> {
    /// Create an executor with the default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: SearchConfig::default(),
        }
    }

    /// Override the configuration.
    ///
    /// The page limit is the divisor of the pagination arithmetic, so a
    /// zero limit is clamped to one document per page instead of being
    /// allowed to panic the first search.
    pub fn with_config(mut self, mut config: SearchConfig) -> Self {
        if config.page_limit == 0 {
            warn!("page_limit 0 is invalid; clamping to 1");
            config.page_limit = 1;
        }
        self.config = config;
        self
    }

    /// Run the predicate against `collection` and assemble the requested
    /// page.
    ///
    /// A `None` predicate short-circuits to the empty terminal page without
    /// touching the store. A query rejected by the store (either the count
    /// or the fetch side) is logged and absorbed into the same empty page;
    /// connectivity failures propagate.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        collection: &str,
        predicate: Option<&Predicate>,
        page: u64,
    ) -> Result<SearchPage<T>, StoreError> {
        let Some(predicate) = predicate else {
            debug!(collection, "no query compiled; skipping store round-trip");
            return Ok(SearchPage::empty());
        };

        let limit = self.config.page_limit;
        let skip = page::skip(page, limit);

        let (count_outcome, find_outcome) = future::join(
            self.store.count_matching(collection, predicate),
            self.store.find_matching(collection, predicate, skip, limit),
        )
        .await;

        let (total, documents) = match (count_outcome, find_outcome) {
            (Ok(total), Ok(documents)) => (total, documents),
            (count_outcome, find_outcome) => {
                for err in [count_outcome.err(), find_outcome.err()]
                    .into_iter()
                    .flatten()
                {
                    if !err.is_query_rejection() {
                        return Err(err);
                    }
                    warn!(
                        collection,
                        error = %err,
                        "store rejected compiled query; degrading to empty result"
                    );
                }
                return Ok(SearchPage::empty());
            }
        };

        let mut items = Vec::with_capacity(documents.len());
        for document in documents {
            match serde_json::from_value(document) {
                Ok(item) => items.push(item),
                Err(err) => {
                    warn!(collection, error = %err, "dropping document that failed to decode");
                }
            }
        }

        let page_count = page::page_count(total, limit);
        debug!(collection, total, returned = items.len(), "search page assembled");

        Ok(SearchPage { page_count, items })
    }
}
