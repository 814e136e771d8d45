//! HTTP header helpers

use axum::http::{HeaderMap, header};

/// Extract the token of an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively; an empty token is treated as absent.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
