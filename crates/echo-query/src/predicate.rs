//! The compiled query-predicate tree.
//!
//! A predicate is an immutable boolean tree of field-match and
//! field-equality leaves. The store serializes it into its native query
//! form: `FieldMatch` becomes a case-insensitive substring/regex match,
//! `FieldEquals` exact equality, `Or`/`And` the native boolean combinators.

use regex::Regex;

/// One node of a compiled query predicate.
///
/// `Or`/`And` children are never empty; the builder's combine rule maps an
/// empty part list to "no query" before a node is ever constructed, because
/// document stores reject empty boolean clauses.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// The named field contains text matching `pattern`.
    FieldMatch {
        /// Dotted path of the field inside the document
        field: String,
        /// Compiled pattern, already escaped by the builder
        pattern: Regex,
        /// Whether the store should match case-insensitively
        case_insensitive: bool,
    },

    /// The named field equals `value` exactly.
    FieldEquals {
        /// Dotted path of the field inside the document
        field: String,
        /// Exact value to compare against
        value: String,
    },

    /// At least one child must hold.
    Or(Vec<Predicate>),

    /// Every child must hold.
    And(Vec<Predicate>),
}

impl Predicate {
    /// Case-insensitive field-match leaf.
    pub fn field_match(field: impl Into<String>, pattern: Regex) -> Self {
        Predicate::FieldMatch {
            field: field.into(),
            pattern,
            case_insensitive: true,
        }
    }

    /// Exact-equality leaf.
    pub fn field_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::FieldEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// OR over the given children.
    pub fn any(children: Vec<Predicate>) -> Self {
        Predicate::Or(children)
    }

    /// AND over the given children.
    pub fn all(children: Vec<Predicate>) -> Self {
        Predicate::And(children)
    }
}

// Structural equality: a compiled Regex has no meaningful pointer identity,
// so leaves compare by pattern source text and the case flag. This is what
// lets tests assert exact tree shapes out of the builder.
impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Predicate::FieldMatch {
                    field: a_field,
                    pattern: a_pattern,
                    case_insensitive: a_ci,
                },
                Predicate::FieldMatch {
                    field: b_field,
                    pattern: b_pattern,
                    case_insensitive: b_ci,
                },
            ) => a_field == b_field && a_pattern.as_str() == b_pattern.as_str() && a_ci == b_ci,
            (
                Predicate::FieldEquals {
                    field: a_field,
                    value: a_value,
                },
                Predicate::FieldEquals {
                    field: b_field,
                    value: b_value,
                },
            ) => a_field == b_field && a_value == b_value,
            (Predicate::Or(a), Predicate::Or(b)) => a == b,
            (Predicate::And(a), Predicate::And(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Predicate {}
