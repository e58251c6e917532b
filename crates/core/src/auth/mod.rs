mod error;
mod functions;
mod http_mapping;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{basic_auth, secret_hash};
pub use http_mapping::auth_error_to_status_code;
pub use traits::{IdentityProvider, Result, SecretProvider};
pub use types::{AuthenticationResult, LoginRequest, SessionResponse, UserPool};
