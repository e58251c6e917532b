//! Cognito user pool identity provider.

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::config::{Credentials, Region};
use aws_sdk_cognitoidentityprovider::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_cognitoidentityprovider::operation::admin_initiate_auth::{
    AdminInitiateAuthError, AdminInitiateAuthOutput,
};
use aws_sdk_cognitoidentityprovider::types::AuthFlowType;
use aws_sdk_cognitoidentityprovider::Client;

use blogapi_core::auth::{
    AuthError, AuthenticationResult, IdentityProvider, LoginRequest, Result, SessionResponse,
    UserPool,
};

use super::IdentitySecrets;

/// Identity provider backed by `AdminInitiateAuth`.
pub struct CognitoIdentityProvider {
    client: Client,
}

impl CognitoIdentityProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client that signs requests with the given static credentials.
    pub async fn with_secrets(secrets: &IdentitySecrets, region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(Credentials::new(
                secrets.access_key_id.clone(),
                secrets.secret_access_key.clone(),
                None,
                None,
                "parameter-store",
            ))
            .load()
            .await;

        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn authenticate(
        &self,
        pool: &UserPool,
        login: &LoginRequest,
        secret_hash: &str,
    ) -> Result<SessionResponse> {
        let output = self
            .client
            .admin_initiate_auth()
            .user_pool_id(&pool.pool_id)
            .client_id(&pool.client_id)
            .auth_flow(AuthFlowType::AdminUserPasswordAuth)
            .auth_parameters("USERNAME", &login.username)
            .auth_parameters("PASSWORD", &login.password)
            .auth_parameters("SECRET_HASH", secret_hash)
            .send()
            .await
            .map_err(map_admin_initiate_auth_error)?;

        Ok(output_to_session(&output))
    }
}

/// Convert an `AdminInitiateAuth` response to the domain session.
fn output_to_session(output: &AdminInitiateAuthOutput) -> SessionResponse {
    SessionResponse {
        challenge_name: output.challenge_name().map(|c| c.as_str().to_string()),
        session: output.session().map(str::to_string),
        challenge_parameters: output.challenge_parameters().cloned().unwrap_or_default(),
        authentication_result: output.authentication_result().map(|r| AuthenticationResult {
            access_token: r.access_token().map(str::to_string),
            expires_in: r.expires_in(),
            token_type: r.token_type().map(str::to_string),
            refresh_token: r.refresh_token().map(str::to_string),
            id_token: r.id_token().map(str::to_string),
        }),
    }
}

/// Map an AdminInitiateAuth SDK error to AuthError.
fn map_admin_initiate_auth_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<AdminInitiateAuthError, R>,
) -> AuthError {
    map_service_error(err.into_service_error())
}

/// Credential problems are rejections; everything else is an upstream failure.
///
/// The service's message is passed on verbatim: the modeled exception message
/// first, then the error metadata.
fn map_service_error(err: AdminInitiateAuthError) -> AuthError {
    let modeled = match &err {
        AdminInitiateAuthError::NotAuthorizedException(e) => e.message(),
        AdminInitiateAuthError::UserNotFoundException(e) => e.message(),
        AdminInitiateAuthError::UserNotConfirmedException(e) => e.message(),
        AdminInitiateAuthError::PasswordResetRequiredException(e) => e.message(),
        AdminInitiateAuthError::InternalErrorException(e) => e.message(),
        AdminInitiateAuthError::TooManyRequestsException(e) => e.message(),
        _ => None,
    };
    let message = modeled
        .filter(|m| !m.is_empty())
        .or_else(|| ProvideErrorMetadata::message(&err).filter(|m| !m.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());

    match err {
        AdminInitiateAuthError::NotAuthorizedException(_)
        | AdminInitiateAuthError::UserNotFoundException(_)
        | AdminInitiateAuthError::UserNotConfirmedException(_)
        | AdminInitiateAuthError::PasswordResetRequiredException(_) => {
            AuthError::Rejected(message)
        }
        _ => AuthError::Upstream(message),
    }
}
