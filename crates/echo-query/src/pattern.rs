//! Pattern escaping and username normalization.
//!
//! Raw search terms come straight from users and may contain regex
//! metacharacters. Everything that reaches a store pattern goes through
//! [`escape`] first, so the compiled regexes below can never fail to build.

use regex::{Regex, RegexBuilder};

/// Trim the term and escape every regex metacharacter in the remainder,
/// making it safe as a literal substring inside a pattern.
///
/// `escape(" ")` is the empty string.
pub fn escape(s: &str) -> String {
    regex::escape(s.trim())
}

/// Compile a case-insensitive "contains, anywhere" pattern: `.*<term>.*`.
pub fn match_any_pattern(s: &str) -> Regex {
    compile_case_insensitive(&format!(".*{}.*", escape(s)))
}

/// Compile a case-insensitive capturing pattern: `(<term>)`.
///
/// Consumed by the result-highlighting collaborator; exposed here because
/// it shares the escaping rules with [`match_any_pattern`].
pub fn highlight_pattern(s: &str) -> Regex {
    compile_case_insensitive(&format!("({})", escape(s)))
}

/// Return the canonical `@name` form of a handle. Idempotent.
pub fn normalize_username(name: &str) -> String {
    if name.starts_with('@') {
        name.to_string()
    } else {
        format!("@{name}")
    }
}

fn compile_case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped term is always a valid pattern")
}
