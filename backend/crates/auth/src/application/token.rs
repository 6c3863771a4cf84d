//! Session Tokens
//!
//! Cookie value format: `<session uuid>.<base64url(HMAC-SHA256(uuid))>`.

use kernel::id::AdminSessionId;

use crate::error::{AuthError, AuthResult};

/// Create a signed session token
pub fn sign_session_token(session_id: &AdminSessionId, secret: &[u8; 32]) -> String {
    let id = session_id.to_string();
    let signature = platform::crypto::hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, platform::crypto::to_base64_url(&signature))
}

/// Verify a token's signature and return the session id it names
pub fn parse_session_token(token: &str, secret: &[u8; 32]) -> AuthResult<AdminSessionId> {
    let (id, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

    let signature =
        platform::crypto::from_base64_url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

    if !platform::crypto::verify_hmac_sha256(secret, id.as_bytes(), &signature) {
        return Err(AuthError::SessionInvalid);
    }

    id.parse().map_err(|_| AuthError::SessionInvalid)
}
