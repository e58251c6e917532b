//! Identity service and secret store clients.
//!
//! # Feature Flags
//!
//! - `cognito`: Cognito user pool login, with the credentials it needs read
//!   from SSM Parameter Store at startup.
//! - without `cognito`: [`MockIdentityProvider`] with users from `MOCK_USERS`
//!   and secrets from environment variables.

#[cfg(any(not(feature = "cognito"), test))]
mod env;
#[cfg(any(not(feature = "cognito"), test))]
mod mock;

#[cfg(any(feature = "cognito", test))]
mod secrets;

#[cfg(feature = "cognito")]
mod cognito;
#[cfg(feature = "cognito")]
mod ssm;

#[cfg(any(not(feature = "cognito"), test))]
pub use env::EnvSecretProvider;
#[cfg(any(not(feature = "cognito"), test))]
pub use mock::MockIdentityProvider;

#[cfg(any(feature = "cognito", test))]
pub use secrets::IdentitySecrets;

#[cfg(feature = "cognito")]
pub use cognito::CognitoIdentityProvider;
#[cfg(feature = "cognito")]
pub use ssm::SsmSecretProvider;
