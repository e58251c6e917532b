use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use blogapi_core::auth::{auth_error_to_status_code, AuthError};
use blogapi_core::pagination::PaginationError;
use blogapi_core::posts::PostError;
use blogapi_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors returned by HTTP handlers.
///
/// Every variant renders as `{"message": "..."}` with the mapped status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Post not found")]
    PostNotFound,

    #[error("No route for {0}")]
    RouteNotFound(String),

    /// A request could not be decoded before reaching the domain layer.
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Post(#[from] PostError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::PostNotFound | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Post(_) | ApiError::Pagination(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Repository(err) => from_u16(repository_error_to_status_code(err)),
            ApiError::Auth(err) => from_u16(auth_error_to_status_code(err)),
        }
    }
}

fn from_u16(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Router fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, message = %message, "API error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(json!({ "message": message }))).into_response()
    }
}
