//! # echo-search
//!
//! Paginated search execution over an archive document store.
//!
//! This crate is the executing half of the search subsystem: `echo-query`
//! compiles raw parameters into a predicate tree, and this crate runs that
//! predicate against a [`DocumentStore`] with pagination, absorbing
//! store-rejected queries into empty results so malformed search input
//! never crashes a caller.
//!
//! ## Core pieces
//!
//! - [`SearchExecutor`]: concurrent count + fetch over one predicate; both
//!   store operations are always driven to completion before the outcome
//!   is decided
//! - [`SearchApi`]: the `search_users` / `search_posts` / `user_exists`
//!   surface consumed by the routing layer
//! - [`DocumentStore`]: the consumed store interface, with [`MemoryStore`]
//!   as the in-memory reference implementation for tests
//! - [`SearchConfig`]: explicit configuration (page limit), never ambient
//!
//! ## Modules
//!
//! - [`page`]: page/skip/limit arithmetic
//! - [`store`]: the store seam
//! - [`executor`]: execution and failure absorption
//! - [`api`]: the exposed search surface
//! - [`config`]: layered configuration loading
//! - [`error`]: the store failure taxonomy

pub mod api;
pub mod config;
pub mod error;
pub mod executor;
pub mod page;
pub mod store;

pub use api::{SearchApi, POSTS_COLLECTION, USERS_COLLECTION};
pub use config::SearchConfig;
pub use error::StoreError;
pub use executor::{SearchExecutor, SearchPage};
pub use page::PAGE_LIMIT;
pub use store::{DocumentStore, MemoryStore};
