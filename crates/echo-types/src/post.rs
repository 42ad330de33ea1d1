//! Archived timeline content: posts, echoes, comments, and linked media.
//!
//! Field sets follow the archive's document shapes. Dates are opaque
//! preformatted strings; nothing in the search layer computes with time.

use serde::{Deserialize, Serialize};

/// External media linked from a post or echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMedia {
    /// Target URL of the linked media
    #[serde(default)]
    pub link: String,

    /// Title of the linked page or article
    #[serde(default)]
    pub title: String,

    /// Preview image URL
    #[serde(default)]
    pub image: String,

    /// Excerpt of the linked content
    #[serde(default)]
    pub excerpt: String,
}

/// A comment left on a post or echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComment {
    /// Handle of the commenting account
    #[serde(default)]
    pub username: String,

    /// Preformatted date string
    #[serde(default)]
    pub date: String,

    /// Comment body
    #[serde(default)]
    pub text: String,

    /// Reply count
    #[serde(default)]
    pub replies: u64,

    /// Echo count
    #[serde(default)]
    pub echos: u64,

    /// Upvote count
    #[serde(default)]
    pub upvotes: u64,
}

/// A reshared post embedded inside another post.
///
/// An echo document carries its own `echo` field in the archive but it is
/// always null, so it is not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    /// Handle of the original author
    #[serde(default)]
    pub username: String,

    /// Preformatted date string
    #[serde(default)]
    pub date: String,

    /// Body of the original post
    #[serde(default)]
    pub text: String,

    /// Impression count
    #[serde(default)]
    pub impressions: u64,

    /// Attached image URL, if any
    #[serde(default)]
    pub image: Option<String>,

    /// Attached video URL, if any
    #[serde(default)]
    pub video: Option<String>,

    /// Linked external media, if any
    #[serde(default)]
    pub media: Option<PostMedia>,

    /// Comments on the original post
    #[serde(default)]
    pub comments: Vec<PostComment>,

    /// Total comment count
    #[serde(default)]
    pub comment_count: u64,

    /// Total echo count
    #[serde(default)]
    pub echo_count: u64,

    /// Total upvote count
    #[serde(default)]
    pub upvote_count: u64,
}

/// A post as stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Handle of the authoring account
    #[serde(default)]
    pub username: String,

    /// Preformatted date string
    #[serde(default)]
    pub date: String,

    /// Post body
    #[serde(default)]
    pub text: String,

    /// Impression count
    #[serde(default)]
    pub impressions: u64,

    /// Attached image URL, if any
    #[serde(default)]
    pub image: Option<String>,

    /// Attached video URL, if any
    #[serde(default)]
    pub video: Option<String>,

    /// Linked external media, if any
    #[serde(default)]
    pub media: Option<PostMedia>,

    /// The reshared post, when this post is an echo of another
    #[serde(default)]
    pub echo: Option<Echo>,

    /// Comments on this post
    #[serde(default)]
    pub comments: Vec<PostComment>,

    /// Total comment count
    #[serde(default)]
    pub comment_count: u64,

    /// Total echo count
    #[serde(default)]
    pub echo_count: u64,

    /// Total upvote count
    #[serde(default)]
    pub upvote_count: u64,
}
