//! Compilation of raw search parameters into predicate trees.
//!
//! Every function here is pure and total. Empty terms compile to `None`,
//! which callers treat as "do not run a query" rather than "match nothing".

use echo_types::SearchBehavior;

use crate::pattern::{match_any_pattern, normalize_username};
use crate::predicate::Predicate;

// Document fields targeted by the compiled queries.
const FIELD_NAME: &str = "name";
const FIELD_USERNAME: &str = "username";
const FIELD_COMMENT_USERNAME: &str = "comments.username";
const FIELD_ECHO_USERNAME: &str = "echo.username";
const FIELD_TEXT: &str = "text";
const FIELD_MEDIA_TITLE: &str = "media.title";
const FIELD_COMMENT_TEXT: &str = "comment.text";
const FIELD_ECHO_TEXT: &str = "echo.text";

/// Contains-search over user profiles: display name or handle.
pub fn users_query(term: &str) -> Option<Predicate> {
    if term.is_empty() {
        return None;
    }
    Some(Predicate::any(vec![
        Predicate::field_match(FIELD_NAME, match_any_pattern(term)),
        Predicate::field_match(FIELD_USERNAME, match_any_pattern(term)),
    ]))
}

/// Exact-match search for posts an account participated in: as author,
/// as a commenter, or as the author of an echoed post.
pub fn posts_by_user_query(username: &str) -> Option<Predicate> {
    if username.is_empty() {
        return None;
    }
    let normalized = normalize_username(username);
    Some(Predicate::any(vec![
        Predicate::field_equals(FIELD_USERNAME, normalized.clone()),
        Predicate::field_equals(FIELD_COMMENT_USERNAME, normalized.clone()),
        Predicate::field_equals(FIELD_ECHO_USERNAME, normalized),
    ]))
}

/// Contains-search across every content-bearing field of a post: its own
/// text, linked media titles, comment text, and echoed text.
pub fn posts_by_content_query(content: &str) -> Option<Predicate> {
    if content.is_empty() {
        return None;
    }
    let pattern = match_any_pattern(content);
    Some(Predicate::any(vec![
        Predicate::field_match(FIELD_TEXT, pattern.clone()),
        Predicate::field_match(FIELD_MEDIA_TITLE, pattern.clone()),
        Predicate::field_match(FIELD_COMMENT_TEXT, pattern.clone()),
        Predicate::field_match(FIELD_ECHO_TEXT, pattern),
    ]))
}

/// Drop the `None` entries, preserving order.
pub fn gather_parts(
    parts: impl IntoIterator<Item = Option<Predicate>>,
) -> Vec<Predicate> {
    parts.into_iter().flatten().collect()
}

/// Combine parts under the given behavior.
///
/// No parts means no query. A single part is returned unchanged whatever
/// the behavior; wrapping it in a one-child boolean node would only nest
/// for nesting's sake.
pub fn combine(mut parts: Vec<Predicate>, behavior: SearchBehavior) -> Option<Predicate> {
    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => Some(match behavior {
            SearchBehavior::MatchAny => Predicate::any(parts),
            SearchBehavior::MatchAll => Predicate::all(parts),
        }),
    }
}

/// Full posts query: author clause, content clause, and optionally a
/// mention clause (the username searched as free text across content
/// fields, which catches `@name` appearing inside other users' posts).
///
/// Under `MatchAll` with mentions on, only the content clause is
/// mandatory; the author and mention clauses fold together disjunctively
/// first. Requiring authored-by AND mentioned-by simultaneously would make
/// mention-inclusion useless. The asymmetry is intentional.
pub fn posts_query(
    username: &str,
    content: &str,
    behavior: SearchBehavior,
    include_mentions: bool,
) -> Option<Predicate> {
    let user_query = posts_by_user_query(username);
    let content_query = posts_by_content_query(content);

    if !include_mentions {
        return combine(gather_parts([user_query, content_query]), behavior);
    }

    let mention_query = posts_by_content_query(username);
    match behavior {
        SearchBehavior::MatchAll => {
            let subquery = combine(
                gather_parts([user_query, mention_query]),
                SearchBehavior::MatchAny,
            );
            combine(
                gather_parts([content_query, subquery]),
                SearchBehavior::MatchAll,
            )
        }
        SearchBehavior::MatchAny => combine(
            gather_parts([user_query, mention_query, content_query]),
            SearchBehavior::MatchAny,
        ),
    }
}

/// Existence check for a handle: exact match against the normalized `@name`
/// on either the display-name or handle field.
pub fn user_query(username: &str) -> Option<Predicate> {
    if username.is_empty() {
        return None;
    }
    let normalized = normalize_username(username);
    Some(Predicate::any(vec![
        Predicate::field_equals(FIELD_NAME, normalized.clone()),
        Predicate::field_equals(FIELD_USERNAME, normalized),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(field: &str, term: &str) -> Predicate {
        Predicate::field_match(field, match_any_pattern(term))
    }

    fn equals(field: &str, value: &str) -> Predicate {
        Predicate::field_equals(field, value)
    }

    fn expected_user_parts(handle: &str) -> Predicate {
        Predicate::any(vec![
            equals("username", handle),
            equals("comments.username", handle),
            equals("echo.username", handle),
        ])
    }

    fn expected_content_parts(term: &str) -> Predicate {
        Predicate::any(vec![
            contains("text", term),
            contains("media.title", term),
            contains("comment.text", term),
            contains("echo.text", term),
        ])
    }

    #[test]
    fn test_users_query_empty_term_is_none() {
        assert_eq!(users_query(""), None);
    }

    #[test]
    fn test_users_query_matches_name_or_username() {
        assert_eq!(
            users_query("abc"),
            Some(Predicate::any(vec![
                contains("name", "abc"),
                contains("username", "abc"),
            ]))
        );
    }

    #[test]
    fn test_posts_by_user_query_normalizes_handle() {
        let expected = Some(expected_user_parts("@test-user"));
        assert_eq!(posts_by_user_query("test-user"), expected);
        assert_eq!(posts_by_user_query("@test-user"), expected);
    }

    #[test]
    fn test_posts_by_content_query_covers_all_content_fields() {
        assert_eq!(
            posts_by_content_query("hello"),
            Some(expected_content_parts("hello"))
        );
    }

    #[test]
    fn test_gather_parts_drops_none_preserving_order() {
        let a = equals("username", "@a");
        let b = equals("username", "@b");
        assert_eq!(
            gather_parts([None, Some(a.clone()), None, Some(b.clone())]),
            vec![a, b]
        );
        assert_eq!(gather_parts([None, None]), vec![]);
    }

    #[test]
    fn test_combine_empty_is_none_for_any_behavior() {
        assert_eq!(combine(vec![], SearchBehavior::MatchAny), None);
        assert_eq!(combine(vec![], SearchBehavior::MatchAll), None);
    }

    #[test]
    fn test_combine_single_part_is_unchanged() {
        let part = equals("username", "@a");
        assert_eq!(
            combine(vec![part.clone()], SearchBehavior::MatchAny),
            Some(part.clone())
        );
        assert_eq!(
            combine(vec![part.clone()], SearchBehavior::MatchAll),
            Some(part)
        );
    }

    #[test]
    fn test_combine_wraps_multiple_parts_by_behavior() {
        let a = equals("username", "@a");
        let b = equals("username", "@b");
        assert_eq!(
            combine(vec![a.clone(), b.clone()], SearchBehavior::MatchAny),
            Some(Predicate::any(vec![a.clone(), b.clone()]))
        );
        assert_eq!(
            combine(vec![a.clone(), b.clone()], SearchBehavior::MatchAll),
            Some(Predicate::all(vec![a, b]))
        );
    }

    #[test]
    fn test_posts_query_both_terms_empty_is_none() {
        assert_eq!(posts_query("", "", SearchBehavior::MatchAll, false), None);
        assert_eq!(posts_query("", "", SearchBehavior::MatchAny, true), None);
    }

    #[test]
    fn test_posts_query_username_only() {
        assert_eq!(
            posts_query("test-user", "", SearchBehavior::MatchAll, false),
            Some(expected_user_parts("@test-user"))
        );
    }

    #[test]
    fn test_posts_query_content_only() {
        assert_eq!(
            posts_query("", "hello", SearchBehavior::MatchAll, false),
            Some(expected_content_parts("hello"))
        );
    }

    #[test]
    fn test_posts_query_both_terms_match_all() {
        assert_eq!(
            posts_query("test-user", "hello", SearchBehavior::MatchAll, false),
            Some(Predicate::all(vec![
                expected_user_parts("@test-user"),
                expected_content_parts("hello"),
            ]))
        );
    }

    #[test]
    fn test_posts_query_both_terms_match_any() {
        assert_eq!(
            posts_query("test-user", "hello", SearchBehavior::MatchAny, false),
            Some(Predicate::any(vec![
                expected_user_parts("@test-user"),
                expected_content_parts("hello"),
            ]))
        );
    }

    #[test]
    fn test_posts_query_mentions_match_all_keeps_content_mandatory() {
        // content AND (authored-by OR mentioned-in): exact tree shape
        assert_eq!(
            posts_query("test-user", "hello", SearchBehavior::MatchAll, true),
            Some(Predicate::all(vec![
                expected_content_parts("hello"),
                Predicate::any(vec![
                    expected_user_parts("@test-user"),
                    expected_content_parts("test-user"),
                ]),
            ]))
        );
    }

    #[test]
    fn test_posts_query_mentions_match_any_flattens_three_siblings() {
        assert_eq!(
            posts_query("test-user", "hello", SearchBehavior::MatchAny, true),
            Some(Predicate::any(vec![
                expected_user_parts("@test-user"),
                expected_content_parts("test-user"),
                expected_content_parts("hello"),
            ]))
        );
    }

    #[test]
    fn test_posts_query_mentions_without_username_match_all() {
        // no username: the user and mention clauses both vanish and the
        // content clause comes back unwrapped
        assert_eq!(
            posts_query("", "hello", SearchBehavior::MatchAll, true),
            Some(expected_content_parts("hello"))
        );
    }

    #[test]
    fn test_posts_query_mentions_without_content_match_all() {
        // no content clause: the disjunctive author/mention fold is all
        // that remains, returned unwrapped
        assert_eq!(
            posts_query("test-user", "", SearchBehavior::MatchAll, true),
            Some(Predicate::any(vec![
                expected_user_parts("@test-user"),
                expected_content_parts("test-user"),
            ]))
        );
    }

    #[test]
    fn test_user_query_exact_match_on_normalized_handle() {
        assert_eq!(user_query(""), None);
        assert_eq!(
            user_query("abc"),
            Some(Predicate::any(vec![
                equals("name", "@abc"),
                equals("username", "@abc"),
            ]))
        );
    }

    #[test]
    fn test_builder_is_referentially_transparent() {
        let first = posts_query("test-user", "hello", SearchBehavior::MatchAll, true);
        let second = posts_query("test-user", "hello", SearchBehavior::MatchAll, true);
        assert_eq!(first, second);
    }
}
