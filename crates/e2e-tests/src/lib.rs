//! End-to-end test infrastructure for echo-search.
//!
//! Provides a shared TestHarness seeding an in-memory store with
//! archive-shaped users and posts, plus fixture-builder helpers.

use std::sync::{Arc, Once};

use serde_json::{json, Value};

use echo_search::{MemoryStore, SearchApi, POSTS_COLLECTION, USERS_COLLECTION};

/// Shared test harness for E2E tests.
///
/// Holds the seeded store and the API facade over it; the store handle is
/// kept so tests can assert on issued call counts.
pub struct TestHarness {
    /// Seeded in-memory store
    pub store: Arc<MemoryStore>,
    /// Search API over the store
    pub api: SearchApi<MemoryStore>,
}

impl TestHarness {
    /// Create a harness over the given store.
    pub fn with_store(store: MemoryStore) -> Self {
        init_tracing();
        let store = Arc::new(store);
        let api = SearchApi::new(store.clone());
        Self { store, api }
    }

    /// Create a harness with the standard fixture set: three users and a
    /// small timeline with comments, echoes, and linked media.
    pub fn seeded() -> Self {
        let users = vec![
            make_user("@test-user", "Test User"),
            make_user("@observer", "Quiet Observer"),
            make_user("@newsbot", "News Bot"),
        ];

        let posts = vec![
            make_post("@test-user", "hello world from the archive", &[], None, None),
            make_post(
                "@observer",
                "interesting thread",
                &[("@test-user", "chiming in here")],
                None,
                None,
            ),
            make_post(
                "@newsbot",
                "",
                &[],
                Some(("@test-user", "my original hot take")),
                None,
            ),
            make_post(
                "@observer",
                "look at this headline",
                &[],
                None,
                Some("Breaking: hello world edition"),
            ),
            make_post("@newsbot", "shoutout to @test-user for the tip", &[], None, None),
        ];

        Self::with_store(
            MemoryStore::new()
                .with_documents(USERS_COLLECTION, users)
                .with_documents(POSTS_COLLECTION, posts),
        )
    }
}

/// Build a user document.
pub fn make_user(username: &str, name: &str) -> Value {
    json!({
        "name": name,
        "username": username,
        "avatar": format!("https://avatars.example/{}.png", username.trim_start_matches('@')),
    })
}

/// Build a post document.
///
/// `comments` are `(username, text)` pairs, `echo` is the echoed author and
/// text, `media_title` becomes a linked-media stub with that title.
pub fn make_post(
    username: &str,
    text: &str,
    comments: &[(&str, &str)],
    echo: Option<(&str, &str)>,
    media_title: Option<&str>,
) -> Value {
    let comments: Vec<Value> = comments
        .iter()
        .map(|(commenter, comment_text)| {
            json!({
                "username": commenter,
                "date": "2020-11-07 16:20:00",
                "text": comment_text,
                "replies": 0,
                "echos": 0,
                "upvotes": 1,
            })
        })
        .collect();

    let echo = echo.map(|(echo_author, echo_text)| {
        json!({
            "username": echo_author,
            "date": "2020-11-06 09:00:00",
            "text": echo_text,
            "impressions": 100,
            "comments": [],
            "comment_count": 0,
            "echo_count": 1,
            "upvote_count": 3,
        })
    });

    let media = media_title.map(|title| {
        json!({
            "link": "https://news.example/story",
            "title": title,
            "image": "https://news.example/story.jpg",
            "excerpt": "",
        })
    });

    json!({
        "username": username,
        "date": "2020-11-07 12:00:00",
        "text": text,
        "impressions": 42,
        "image": null,
        "video": null,
        "media": media,
        "echo": echo,
        "comments": comments,
        "comment_count": comments.len(),
        "echo_count": 0,
        "upvote_count": 2,
    })
}

/// Build `count` filler posts by one author, texts numbered from 0.
pub fn make_filler_posts(username: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| make_post(username, &format!("filler post {i}"), &[], None, None))
        .collect()
}

static INIT: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
