use thiserror::Error;

/// Errors that can occur when decoding a post payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("Request body is required")]
    EmptyBody,
    #[error("Invalid post payload: {0}")]
    InvalidPayload(String),
}
