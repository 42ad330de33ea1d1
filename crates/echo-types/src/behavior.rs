//! Search behavior and request types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How multiple search clauses are combined into one query.
///
/// A legacy `UsernameAggressive` variant existed in earlier revisions
/// (probe the author query first, then pick whichever query hit). It is
/// superseded by the explicit mention-inclusion flag on [`SearchRequest`]
/// and must not be reintroduced; historical data recorded under that
/// behavior should be reconciled as `MatchAny` with mentions enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchBehavior {
    /// Any one clause matching is enough (OR composition).
    #[default]
    MatchAny,

    /// Every clause must match (AND composition).
    MatchAll,
}

impl SearchBehavior {
    /// Returns the wire/display name for this behavior.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchBehavior::MatchAny => "match_any",
            SearchBehavior::MatchAll => "match_all",
        }
    }
}

impl std::str::FromStr for SearchBehavior {
    type Err = ParseBehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match_any" => Ok(SearchBehavior::MatchAny),
            "match_all" => Ok(SearchBehavior::MatchAll),
            other => Err(ParseBehaviorError(other.to_string())),
        }
    }
}

/// Error returned when a behavior string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search behavior: {0}")]
pub struct ParseBehaviorError(pub String);

/// Raw parameters of one search, as handed over by the routing layer.
///
/// The routing layer owns parsing and clamping: by the time a request
/// reaches the search core, `page` is a valid zero-based index and the
/// terms are plain strings (possibly empty, which means "no clause").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Username fragment or handle to search for (empty = no author clause)
    #[serde(default)]
    pub username_term: String,

    /// Free-text content to search for (empty = no content clause)
    #[serde(default)]
    pub content_term: String,

    /// How the author and content clauses compose
    #[serde(default)]
    pub behavior: SearchBehavior,

    /// Also match posts that merely mention the username in their content
    #[serde(default)]
    pub include_mentions: bool,

    /// Zero-based page index, already clamped by the caller
    #[serde(default)]
    pub page: u64,
}

impl SearchRequest {
    /// Create a request for the given terms with default behavior,
    /// mentions off, first page.
    pub fn new(username_term: impl Into<String>, content_term: impl Into<String>) -> Self {
        Self {
            username_term: username_term.into(),
            content_term: content_term.into(),
            behavior: SearchBehavior::default(),
            include_mentions: false,
            page: 0,
        }
    }

    /// Set the clause-composition behavior.
    pub fn with_behavior(mut self, behavior: SearchBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Enable mention-inclusion.
    pub fn with_mentions(mut self) -> Self {
        self.include_mentions = true;
        self
    }

    /// Select a page other than the first.
    pub fn on_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_behavior_round_trip() {
        for behavior in [SearchBehavior::MatchAny, SearchBehavior::MatchAll] {
            let parsed = SearchBehavior::from_str(behavior.as_str()).unwrap();
            assert_eq!(parsed, behavior);
        }
    }

    #[test]
    fn test_behavior_rejects_unknown() {
        let err = SearchBehavior::from_str("username_aggressive").unwrap_err();
        assert_eq!(err, ParseBehaviorError("username_aggressive".to_string()));
    }

    #[test]
    fn test_behavior_default_is_match_any() {
        assert_eq!(SearchBehavior::default(), SearchBehavior::MatchAny);
    }

    #[test]
    fn test_request_builder() {
        let request = SearchRequest::new("someone", "hello")
            .with_behavior(SearchBehavior::MatchAll)
            .with_mentions()
            .on_page(3);

        assert_eq!(request.username_term, "someone");
        assert_eq!(request.content_term, "hello");
        assert_eq!(request.behavior, SearchBehavior::MatchAll);
        assert!(request.include_mentions);
        assert_eq!(request.page, 3);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, SearchRequest::new("", ""));
    }
}
