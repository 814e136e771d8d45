//! Signed Token Codec
//!
//! Format: `base64url(payload) "." base64url(HMAC-SHA256(secret, base64url(payload)))`.
//! The payload is opaque to this module; callers put serialized claims in it.

use crate::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

/// Why a token was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignedTokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    BadSignature,
}

/// Sign `payload` with `secret`
pub fn sign(payload: &[u8], secret: &[u8]) -> String {
    let body = to_base64_url(payload);
    let tag = hmac_sha256(secret, body.as_bytes());
    format!("{}.{}", body, to_base64_url(&tag))
}

/// Verify `token` and return its payload
pub fn verify(token: &str, secret: &[u8]) -> Result<Vec<u8>, SignedTokenError> {
    let (body, tag_b64) = token.split_once('.').ok_or(SignedTokenError::Malformed)?;
    if body.is_empty() || tag_b64.contains('.') {
        return Err(SignedTokenError::Malformed);
    }

    let tag = from_base64_url(tag_b64).map_err(|_| SignedTokenError::Malformed)?;
    if !verify_hmac_sha256(secret, body.as_bytes(), &tag) {
        return Err(SignedTokenError::BadSignature);
    }

    from_base64_url(body).map_err(|_| SignedTokenError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = &[7u8; 32];

    #[test]
    fn test_sign_then_verify() {
        let token = sign(br#"{"sub":"x"}"#, SECRET);
        assert_eq!(verify(&token, SECRET).unwrap(), br#"{"sub":"x"}"#);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = sign(b"payload", SECRET);
        assert_eq!(verify(&token, &[8u8; 32]), Err(SignedTokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = sign(b"payload", SECRET);
        let (_, tag) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", to_base64_url(b"other"), tag);
        assert_eq!(verify(&forged, SECRET), Err(SignedTokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify("", SECRET), Err(SignedTokenError::Malformed));
        assert_eq!(verify("abc", SECRET), Err(SignedTokenError::Malformed));
        assert_eq!(verify("a.b.c", SECRET), Err(SignedTokenError::Malformed));
        assert_eq!(verify("abc.!!!", SECRET), Err(SignedTokenError::Malformed));
    }
}
