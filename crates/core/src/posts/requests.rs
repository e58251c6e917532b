//! API request types for post operations.
//!
//! Request bodies are decoded from raw bytes so that a missing or wrong
//! `Content-Type` header from the gateway does not change the outcome.

use serde::{Deserialize, Serialize};

use super::{Post, PostError};

/// Request payload for creating a new post.
///
/// All three fields are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl CreatePostRequest {
    /// Create a new request.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            date: date.into(),
        }
    }

    /// Decode a request from a JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, PostError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PostError::EmptyBody);
        }
        serde_json::from_slice(body).map_err(|e| PostError::InvalidPayload(e.to_string()))
    }

    /// Convert into a Post with a newly generated identifier.
    pub fn into_post(self) -> Post {
        Post::new(self.title, self.content, self.date)
    }
}
