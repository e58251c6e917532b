//! Login handler.

use axum::{body::Bytes, extract::State, Json};

use blogapi_core::auth::{secret_hash, LoginRequest, SessionResponse};

use crate::{handlers::ApiError, state::AppState};

/// Authenticate against the user pool (POST /auth/login).
///
/// Returns the identity service's session response unchanged. Rejected
/// credentials map to 401, other identity failures to 502.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SessionResponse>, ApiError> {
    let login = LoginRequest::from_json(&body)?;
    let hash = secret_hash(
        &login.username,
        &state.user_pool.client_id,
        &state.client_secret,
    )?;

    let session = state
        .identity
        .authenticate(&state.user_pool, &login, &hash)
        .await?;

    tracing::info!(
        username = %login.username,
        challenge = ?session.challenge_name,
        "Login succeeded"
    );

    Ok(Json(session))
}
