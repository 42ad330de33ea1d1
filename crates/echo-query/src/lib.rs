//! # echo-query
//!
//! Pure query-predicate compiler for the echo-search subsystem.
//!
//! Raw search parameters go in, an optional [`Predicate`] tree comes out.
//! `None` is a meaningful value: "there is nothing to search for, do not
//! run a query". Everything in this crate is pure and total; no I/O, no
//! ambient state, and identical inputs always produce structurally
//! identical trees.
//!
//! ## Modules
//!
//! - [`pattern`]: escaping and compilation of case-insensitive contains
//!   patterns, plus username normalization
//! - [`predicate`]: the boolean tree of field-match / field-equality leaves
//! - [`builder`]: the compiler functions that assemble trees from raw
//!   username/content terms

pub mod builder;
pub mod pattern;
pub mod predicate;

pub use builder::{
    combine, gather_parts, posts_by_content_query, posts_by_user_query, posts_query, user_query,
    users_query,
};
pub use pattern::{escape, highlight_pattern, match_any_pattern, normalize_username};
pub use predicate::Predicate;
