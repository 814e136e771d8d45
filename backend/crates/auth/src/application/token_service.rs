//! Token Service
//!
//! Issues and verifies the signed access/refresh token pair.

use std::sync::Arc;

use chrono::Utc;
use platform::signed_token;

use crate::application::config::AuthConfig;
use crate::domain::entity::token::{TokenClaims, TokenKind, TokenPair};
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

#[derive(Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn issue_pair(&self, user: &User) -> AuthResult<TokenPair> {
        self.issue_pair_at(user, Utc::now().timestamp_millis())
    }

    pub fn issue_pair_at(&self, user: &User, now_ms: i64) -> AuthResult<TokenPair> {
        let access_expires_at_ms = now_ms + self.config.access_token_ttl_ms();
        let refresh_expires_at_ms = now_ms + self.config.refresh_token_ttl_ms();

        Ok(TokenPair {
            access_token: self.sign(user, TokenKind::Access, now_ms, access_expires_at_ms)?,
            refresh_token: self.sign(user, TokenKind::Refresh, now_ms, refresh_expires_at_ms)?,
            access_expires_at_ms,
            refresh_expires_at_ms,
        })
    }

    pub fn verify(&self, token: &str, expected: TokenKind) -> AuthResult<TokenClaims> {
        self.verify_at(token, expected, Utc::now().timestamp_millis())
    }

    pub fn verify_at(&self, token: &str, expected: TokenKind, now_ms: i64) -> AuthResult<TokenClaims> {
        let payload = signed_token::verify(token, &self.config.token_secret).map_err(|e| {
            tracing::debug!(reason = %e, "Token rejected by codec");
            AuthError::TokenInvalid
        })?;

        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

        if claims.kind != expected {
            return Err(AuthError::WrongTokenKind);
        }
        if claims.is_expired(now_ms) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    fn sign(&self, user: &User, kind: TokenKind, now_ms: i64, expires_at_ms: i64) -> AuthResult<String> {
        let claims = TokenClaims {
            sub: user.user_id,
            email: user.email.as_str().to_owned(),
            role: user.role,
            kind,
            issued_at_ms: now_ms,
            expires_at_ms,
        };
        let payload = serde_json::to_vec(&claims).map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(signed_token::sign(&payload, &self.config.token_secret))
    }
}
