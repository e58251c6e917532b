use super::AuthError;

/// Maps an [`AuthError`] to an HTTP status code.
///
/// - `InvalidRequest` -> 400
/// - `Rejected` -> 401
/// - `Upstream` -> 502
/// - `Secret` -> 502
pub fn auth_error_to_status_code(error: &AuthError) -> u16 {
    match error {
        AuthError::InvalidRequest(_) => 400,
        AuthError::Rejected(_) => 401,
        AuthError::Upstream(_) | AuthError::Secret { .. } => 502,
    }
}
