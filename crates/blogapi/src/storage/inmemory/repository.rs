//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogapi_core::pagination::{Page, PageCursor};
use blogapi_core::posts::Post;
use blogapi_core::storage::{PostRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    posts: Arc<RwLock<BTreeMap<String, Post>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `posts`.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts = posts
            .into_iter()
            .map(|post| (post.id.clone(), post))
            .collect();
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn put_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn scan_posts(
        &self,
        limit: i32,
        exclusive_start: Option<&PageCursor>,
    ) -> Result<Page<Post>> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid scan limit: {limit}")))?;

        let posts = self.posts.read().await;
        let lower = match exclusive_start {
            Some(cursor) => Excluded(cursor.as_str().to_string()),
            None => Unbounded,
        };
        let mut remaining = posts.range((lower, Unbounded)).map(|(_, post)| post);

        let items: Vec<Post> = remaining.by_ref().take(limit).cloned().collect();
        let next = match (items.last(), remaining.next()) {
            (Some(last), Some(_)) => Some(PageCursor::new(last.id.clone())),
            _ => None,
        };

        Ok(Page::new(items, next))
    }
}
