//! Mock identity provider for development and testing.
//!
//! Behaves like a user pool with a fixed set of users: it checks the secret
//! hash the same way the real service does and issues opaque mock tokens.

use std::collections::HashMap;

use async_trait::async_trait;

use blogapi_core::auth::{
    secret_hash, AuthError, AuthenticationResult, IdentityProvider, LoginRequest, Result,
    SessionResponse, UserPool,
};

/// Token lifetime reported by mock sessions, in seconds.
const MOCK_EXPIRES_IN: i32 = 3600;

/// In-process stand-in for the user pool.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    client_secret: String,
    users: HashMap<String, String>,
}

impl MockIdentityProvider {
    /// Create a provider with no users that expects hashes keyed by `client_secret`.
    pub fn new(client_secret: impl Into<String>) -> Self {
        Self {
            client_secret: client_secret.into(),
            users: HashMap::new(),
        }
    }

    /// Add a user.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(username.into(), password.into());
        self
    }

    /// Add users from a `user:password,user:password` list.
    ///
    /// Entries without a `:` are skipped.
    pub fn with_users_from(self, list: &str) -> Self {
        list.split(',')
            .filter_map(|entry| entry.trim().split_once(':'))
            .fold(self, |provider, (username, password)| {
                provider.with_user(username, password)
            })
    }

    /// Number of known users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(
        &self,
        pool: &UserPool,
        login: &LoginRequest,
        provided_hash: &str,
    ) -> Result<SessionResponse> {
        let expected = secret_hash(&login.username, &pool.client_id, &self.client_secret)?;
        if provided_hash != expected {
            return Err(AuthError::Rejected(format!(
                "Unable to verify secret hash for client {}",
                pool.client_id
            )));
        }

        match self.users.get(&login.username) {
            Some(password) if *password == login.password => {}
            _ => {
                return Err(AuthError::Rejected(
                    "Incorrect username or password.".to_string(),
                ))
            }
        }

        Ok(SessionResponse {
            authentication_result: Some(AuthenticationResult {
                access_token: Some(format!("mock-access-token-{}", login.username)),
                expires_in: MOCK_EXPIRES_IN,
                token_type: Some("Bearer".to_string()),
                refresh_token: Some(format!("mock-refresh-token-{}", login.username)),
                id_token: Some(format!("mock-id-token-{}", login.username)),
            }),
            ..Default::default()
        })
    }
}
