use async_trait::async_trait;

use super::{AuthError, LoginRequest, SessionResponse, UserPool};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Abstraction over the managed identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Run the admin username/password flow against `pool`.
    ///
    /// Errors from the service are returned unchanged: credential problems
    /// as [`AuthError::Rejected`], everything else as [`AuthError::Upstream`].
    async fn authenticate(
        &self,
        pool: &UserPool,
        login: &LoginRequest,
        secret_hash: &str,
    ) -> Result<SessionResponse>;
}

/// Source of long-lived named secrets.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetch the secret stored under `name`.
    async fn get_secret(&self, name: &str) -> Result<String>;
}
