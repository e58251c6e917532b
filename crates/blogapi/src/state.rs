//! Application state.
//!
//! Collaborators are built once by the entry point and shared by every
//! request handler as trait objects.

use std::sync::Arc;

use blogapi_core::auth::{IdentityProvider, UserPool};
use blogapi_core::storage::PostRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Post storage.
    pub posts: Arc<dyn PostRepository>,
    /// Identity service used by the login handler.
    pub identity: Arc<dyn IdentityProvider>,
    /// User pool and app client logins are made against.
    pub user_pool: UserPool,
    /// App client secret, the key of the login secret hash.
    pub client_secret: Arc<str>,
    /// Page size for list requests without `limit`.
    pub default_page_limit: i32,
}

impl AppState {
    /// Creates a new AppState with the given collaborators and configuration.
    pub fn new(
        posts: Arc<dyn PostRepository>,
        identity: Arc<dyn IdentityProvider>,
        client_secret: impl Into<Arc<str>>,
        config: &Config,
    ) -> Self {
        Self {
            posts,
            identity,
            user_pool: config.user_pool(),
            client_secret: client_secret.into(),
            default_page_limit: config.default_page_limit,
        }
    }

    /// Builds every collaborator selected by the enabled features.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let posts = post_repository(config).await?;
        let (identity, client_secret) = identity_provider(config).await?;
        Ok(Self::new(posts, identity, client_secret, config))
    }
}

// ============================================================================
// Factory functions for the selected backends
// ============================================================================

#[cfg(feature = "inmemory")]
async fn post_repository(_config: &Config) -> anyhow::Result<Arc<dyn PostRepository>> {
    use crate::storage::InMemoryRepository;

    tracing::info!("Using in-memory post storage");
    Ok(Arc::new(InMemoryRepository::new()))
}

#[cfg(feature = "dynamodb")]
async fn post_repository(config: &Config) -> anyhow::Result<Arc<dyn PostRepository>> {
    use crate::storage::DynamoDbRepository;

    let repo =
        DynamoDbRepository::connect(&config.posts_table_name, config.dynamodb_endpoint.as_deref())
            .await;
    Ok(Arc::new(repo))
}

#[cfg(feature = "cognito")]
async fn identity_provider(
    config: &Config,
) -> anyhow::Result<(Arc<dyn IdentityProvider>, String)> {
    use crate::identity::{CognitoIdentityProvider, IdentitySecrets, SsmSecretProvider};

    let ssm = SsmSecretProvider::from_env().await;
    let secrets = IdentitySecrets::load(&ssm, config).await?;
    let provider = CognitoIdentityProvider::with_secrets(&secrets, &config.aws_region).await;

    tracing::info!(
        pool_id = %config.user_pool_id,
        region = %config.aws_region,
        "Using Cognito identity provider"
    );
    Ok((Arc::new(provider), secrets.client_secret))
}

#[cfg(not(feature = "cognito"))]
async fn identity_provider(
    config: &Config,
) -> anyhow::Result<(Arc<dyn IdentityProvider>, String)> {
    use blogapi_core::auth::SecretProvider;

    use crate::identity::{EnvSecretProvider, MockIdentityProvider};

    let secrets = EnvSecretProvider::from_env();
    let client_secret = match secrets.get_secret(&config.client_secret_param).await {
        Ok(secret) => secret,
        Err(e) => {
            tracing::warn!(error = %e, "No client secret configured, using an empty one");
            String::new()
        }
    };

    let provider =
        MockIdentityProvider::new(client_secret.clone()).with_users_from(&config.mock_users);

    tracing::info!(users = provider.user_count(), "Using mock identity provider");
    Ok((Arc::new(provider), client_secret))
}
