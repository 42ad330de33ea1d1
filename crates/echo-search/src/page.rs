//! Page/skip/limit arithmetic shared by all entity searches.

/// Default fixed page size.
pub const PAGE_LIMIT: u64 = 20;

/// Number of documents to bypass to reach the given zero-based page.
pub fn skip(page: u64, limit: u64) -> u64 {
    page * limit
}

/// Total page count for a match total.
///
/// Always at least 1: an empty result set still renders one (empty) page.
pub fn page_count(total: u64, limit: u64) -> u64 {
    total / limit + 1
}
