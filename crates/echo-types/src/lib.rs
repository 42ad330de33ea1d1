//! # echo-types
//!
//! Shared domain types for the echo-search subsystem.
//!
//! This crate defines the records the search layer selects from the archive
//! store, plus the request-shaped types the query compiler consumes:
//! - `User`: an archived account profile
//! - `Post` / `Echo` / `PostComment` / `PostMedia`: archived timeline content
//! - `SearchBehavior`: how multiple search clauses compose (any vs. all)
//! - `SearchRequest`: the raw, already-clamped parameters of one search
//!
//! The search layer never creates or mutates these entities; it only selects
//! them, so every type here is a plain serde-derived record.

pub mod behavior;
pub mod post;
pub mod user;

pub use behavior::{ParseBehaviorError, SearchBehavior, SearchRequest};
pub use post::{Echo, Post, PostComment, PostMedia};
pub use user::User;
