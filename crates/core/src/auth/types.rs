use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::AuthError;

/// Identifies the user pool and app client a login is made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPool {
    pub pool_id: String,
    pub client_id: String,
}

impl UserPool {
    pub fn new(pool_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            pool_id: pool_id.into(),
            client_id: client_id.into(),
        }
    }
}

/// Username/password login payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Decode a login request from a JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, AuthError> {
        serde_json::from_slice(body).map_err(|e| AuthError::InvalidRequest(e.to_string()))
    }
}

// Keeps passwords out of logs.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Tokens issued after a successful authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

/// The identity service's answer to a login attempt.
///
/// Field names follow the identity service's own response so the payload can
/// be handed to clients as-is. Either `authentication_result` is set, or a
/// challenge is pending and `challenge_name`/`session` describe it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(default)]
    pub challenge_parameters: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_result: Option<AuthenticationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_decodes_from_json() {
        let request = LoginRequest::from_json(br#"{"username":"alice","password":"pw"}"#).unwrap();
        assert_eq!(request, LoginRequest::new("alice", "pw"));
    }

    #[test]
    fn login_request_requires_password() {
        let err = LoginRequest::from_json(br#"{"username":"alice"}"#).unwrap_err();
        assert!(matches!(err, AuthError::InvalidRequest(msg) if msg.contains("password")));
    }

    #[test]
    fn login_request_debug_redacts_password() {
        let debug = format!("{:?}", LoginRequest::new("alice", "hunter2"));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn session_response_uses_identity_service_field_names() {
        let response = SessionResponse {
            authentication_result: Some(AuthenticationResult {
                access_token: Some("access".to_string()),
                expires_in: 3600,
                token_type: Some("Bearer".to_string()),
                refresh_token: None,
                id_token: Some("id".to_string()),
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "ChallengeParameters": {},
                "AuthenticationResult": {
                    "AccessToken": "access",
                    "ExpiresIn": 3600,
                    "TokenType": "Bearer",
                    "IdToken": "id",
                }
            })
        );
    }

    #[test]
    fn challenge_response_round_trips() {
        let json = r#"{
            "ChallengeName": "NEW_PASSWORD_REQUIRED",
            "Session": "opaque",
            "ChallengeParameters": {"USER_ID_FOR_SRP": "alice"}
        }"#;

        let response: SessionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.challenge_name.as_deref(), Some("NEW_PASSWORD_REQUIRED"));
        assert_eq!(response.session.as_deref(), Some("opaque"));
        assert_eq!(
            response.challenge_parameters.get("USER_ID_FOR_SRP").map(String::as_str),
            Some("alice")
        );
        assert!(response.authentication_result.is_none());
    }
}
