//! Post handlers.
//!
//! Listing is an unordered scan: pages come back in whatever order the
//! store yields them, and clients follow `next_url` until it is null.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use blogapi_core::pagination::{PageRequest, PostListView};
use blogapi_core::posts::{CreatePostRequest, Post};

use crate::{handlers::ApiError, state::AppState};

/// Query parameters for listing posts.
///
/// Both are kept as raw text so a bad `limit` becomes a JSON 400 instead of
/// an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<String>,
    pub start_key: Option<String>,
}

// ============================================================================
// List Posts
// ============================================================================

/// List one page of posts (GET /posts).
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> Result<Json<PostListView>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let request = PageRequest::from_query(
        query.limit.as_deref(),
        query.start_key.as_deref(),
        state.default_page_limit,
    )?;

    let page = state
        .posts
        .scan_posts(request.limit, request.start_key.as_ref())
        .await?;

    tracing::debug!(
        limit = request.limit,
        count = page.items.len(),
        last_page = page.is_last(),
        "Listed posts"
    );

    Ok(Json(PostListView::from_page(page, request.limit)))
}

// ============================================================================
// Get Post
// ============================================================================

/// Get a single post (GET /posts/{id}).
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .posts
        .get_post(&id)
        .await?
        .ok_or(ApiError::PostNotFound)?;

    Ok(Json(post))
}

// ============================================================================
// Create Post
// ============================================================================

/// Create a post (POST /posts).
///
/// The body is decoded as JSON whatever the `Content-Type` says.
pub async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Post>, ApiError> {
    let post = CreatePostRequest::from_json(&body)?.into_post();

    state.posts.put_post(&post).await?;

    tracing::info!(post_id = %post.id, title = %post.title, "Created post");

    Ok(Json(post))
}
