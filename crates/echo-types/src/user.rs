//! Archived account profiles.

use serde::{Deserialize, Serialize};

/// An account profile as stored in the archive.
///
/// Documents in the store are loosely shaped; every field defaults to
/// empty when absent rather than failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Unique handle, canonically prefixed with `@`
    #[serde(default)]
    pub username: String,

    /// Avatar image URL
    #[serde(default)]
    pub avatar: String,
}
