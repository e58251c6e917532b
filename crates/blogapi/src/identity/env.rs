use std::collections::HashMap;

use async_trait::async_trait;

use blogapi_core::auth::{AuthError, Result, SecretProvider};

/// Secret provider backed by environment variables.
///
/// The secret `client_secret` is read from `CLIENT_SECRET`: names are
/// upper-cased before lookup. Variables are captured once at construction.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretProvider {
    vars: HashMap<String, String>,
}

impl EnvSecretProvider {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self::with_vars(std::env::vars())
    }

    /// Use an explicit set of variables.
    pub fn with_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<String> {
        let var = name.to_ascii_uppercase();
        self.vars.get(&var).cloned().ok_or_else(|| AuthError::Secret {
            name: name.to_string(),
            message: format!("environment variable {var} is not set"),
        })
    }
}
