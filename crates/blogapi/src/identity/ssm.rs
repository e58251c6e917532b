//! SSM Parameter Store secret provider.

use async_trait::async_trait;
use aws_sdk_ssm::error::ProvideErrorMetadata;
use aws_sdk_ssm::Client;

use blogapi_core::auth::{AuthError, Result, SecretProvider};

/// Reads secrets as decrypted SSM parameters.
pub struct SsmSecretProvider {
    client: Client,
}

impl SsmSecretProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a provider using the default credential chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl SecretProvider for SsmSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                AuthError::Secret {
                    name: name.to_string(),
                    message: err
                        .message()
                        .map(str::to_string)
                        .unwrap_or_else(|| err.to_string()),
                }
            })?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_string)
            .ok_or_else(|| AuthError::Secret {
                name: name.to_string(),
                message: "parameter has no value".to_string(),
            })
    }
}
