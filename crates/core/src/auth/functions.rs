use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Compute the secret hash the user pool expects alongside a login attempt.
///
/// `base64(HMAC-SHA256(key = client_secret, message = username + client_id))`
pub fn secret_hash(
    username: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, AuthError> {
    let mut mac = HmacSha256::new_from_slice(client_secret.as_bytes()).map_err(|e| {
        AuthError::Secret {
            name: "client_secret".to_string(),
            message: e.to_string(),
        }
    })?;
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Value for an `Authorization: Basic` header built from app client credentials.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    BASE64.encode(format!("{client_id}:{client_secret}"))
}
