use serde::{Deserialize, Serialize};

use crate::posts::Post;

use super::PageCursor;

/// Path of the listing endpoint embedded in `next_url`.
pub const POSTS_PATH: &str = "/posts";

/// One page of a store scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Present only when the store reported a continuation key.
    pub next: Option<PageCursor>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next: Option<PageCursor>) -> Self {
        Self { items, next }
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Response body of the post listing endpoint.
///
/// ```json
/// { "items": [...], "next_url": "/posts?limit=10&start_key=..." }
/// ```
///
/// `next_url` is `null` on the last page. Item order is whatever the store
/// produced and may differ between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListView {
    pub items: Vec<Post>,
    pub next_url: Option<String>,
}

impl PostListView {
    /// Build the view for a scanned page requested with `limit`.
    pub fn from_page(page: Page<Post>, limit: i32) -> Self {
        let next_url = page.next.as_ref().map(|cursor| next_url(limit, cursor));
        Self {
            items: page.items,
            next_url,
        }
    }
}

/// Build the continuation URL for the listing endpoint.
///
/// The cursor is percent-encoded so it survives the round trip through the
/// query string unchanged.
pub fn next_url(limit: i32, cursor: &PageCursor) -> String {
    format!(
        "{POSTS_PATH}?limit={limit}&start_key={}",
        urlencoding::encode(cursor.as_str())
    )
}
