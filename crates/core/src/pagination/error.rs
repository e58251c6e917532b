use thiserror::Error;

/// Errors that can occur when decoding pagination parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid limit '{0}': must be a positive integer")]
    InvalidLimit(String),
}
