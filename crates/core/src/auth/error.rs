use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The login payload could not be decoded.
    #[error("invalid login request: {0}")]
    InvalidRequest(String),

    /// The identity service refused the credentials.
    #[error("{0}")]
    Rejected(String),

    /// The identity service failed for a reason unrelated to the credentials.
    #[error("identity service error: {0}")]
    Upstream(String),

    /// A named secret could not be read from the credential provider.
    #[error("failed to read secret '{name}': {message}")]
    Secret { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_service_message_verbatim() {
        let err = AuthError::Rejected("Incorrect username or password.".to_string());
        assert_eq!(err.to_string(), "Incorrect username or password.");
    }

    #[test]
    fn secret_error_names_the_parameter() {
        let err = AuthError::Secret {
            name: "client_secret".to_string(),
            message: "ParameterNotFound".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read secret 'client_secret': ParameterNotFound"
        );
    }
}
