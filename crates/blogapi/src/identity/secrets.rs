use blogapi_core::auth::{Result, SecretProvider};

use crate::config::Config;

/// The three secrets read before the identity client is built.
#[derive(Clone)]
pub struct IdentitySecrets {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub client_secret: String,
}

impl IdentitySecrets {
    /// Fetch every secret named in `config` from `provider`.
    pub async fn load(provider: &dyn SecretProvider, config: &Config) -> Result<Self> {
        let access_key_id = provider.get_secret(&config.access_key_id_param).await?;
        let secret_access_key = provider.get_secret(&config.secret_access_key_param).await?;
        let client_secret = provider.get_secret(&config.client_secret_param).await?;

        tracing::debug!(
            access_key_id_param = %config.access_key_id_param,
            secret_access_key_param = %config.secret_access_key_param,
            client_secret_param = %config.client_secret_param,
            "Loaded identity secrets"
        );

        Ok(Self {
            access_key_id,
            secret_access_key,
            client_secret,
        })
    }
}

impl std::fmt::Debug for IdentitySecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySecrets")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
