use async_trait::async_trait;

use crate::pagination::{Page, PageCursor};
use crate::posts::Post;

use super::Result;

/// Repository for blog posts.
///
/// The underlying table is keyed by post id and offers no ordering: scans
/// return records in whatever order the store chooses.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Gets a post by its ID. A missing key is `Ok(None)`, not an error.
    async fn get_post(&self, id: &str) -> Result<Option<Post>>;

    /// Writes a post, replacing any existing record with the same ID.
    async fn put_post(&self, post: &Post) -> Result<()>;

    /// Scans up to `limit` posts, resuming strictly after `exclusive_start`.
    ///
    /// The returned page carries a cursor only when the store reports a
    /// continuation key. A page may hold fewer than `limit` items and still
    /// carry a cursor.
    async fn scan_posts(
        &self,
        limit: i32,
        exclusive_start: Option<&PageCursor>,
    ) -> Result<Page<Post>>;
}
