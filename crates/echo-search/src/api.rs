//! The exposed search API consumed by the routing layer.
//!
//! Thin facade: compile the predicate with `echo-query`, hand it to the
//! executor, and keep the store's failure classes from leaking to callers
//! who only asked a yes/no question.

use std::sync::Arc;

use echo_query::builder;
use echo_types::{Post, SearchRequest, User};
use tracing::warn;

use crate::config::SearchConfig;
use crate::error::StoreError;
use crate::executor::{SearchExecutor, SearchPage};
use crate::store::DocumentStore;

/// Collection holding account profiles.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding posts.
pub const POSTS_COLLECTION: &str = "posts";

/// Search entry points over one archive store.
pub struct SearchApi<S> {
    store: Arc<S>,
    executor: SearchExecutor<S>,
}

impl<S: DocumentStore> SearchApi<S> {
    /// Create an API over the given store with default configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    /// Create an API with explicit configuration.
    pub fn with_config(store: Arc<S>, config: SearchConfig) -> Self {
        let executor = SearchExecutor::new(store.clone()).with_config(config);
        Self { store, executor }
    }

    /// Contains-search over user profiles by display name or handle.
    pub async fn search_users(
        &self,
        term: &str,
        page: u64,
    ) -> Result<SearchPage<User>, StoreError> {
        let query = builder::users_query(term);
        self.executor
            .execute(USERS_COLLECTION, query.as_ref(), page)
            .await
    }

    /// Combined author/content/mention search over posts.
    pub async fn search_posts(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchPage<Post>, StoreError> {
        let query = builder::posts_query(
            &request.username_term,
            &request.content_term,
            request.behavior,
            request.include_mentions,
        );
        self.executor
            .execute(POSTS_COLLECTION, query.as_ref(), request.page)
            .await
    }

    /// Whether an account with the given handle exists in the archive.
    ///
    /// A store-rejected query answers `false` rather than erroring; the
    /// caller asked a yes/no question about malformed input.
    pub async fn user_exists(&self, username: &str) -> Result<bool, StoreError> {
        let Some(query) = builder::user_query(username) else {
            return Ok(false);
        };

        match self.store.count_matching(USERS_COLLECTION, &query).await {
            Ok(total) => Ok(total > 0),
            Err(err) if err.is_query_rejection() => {
                warn!(username, error = %err, "existence check rejected by store");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
