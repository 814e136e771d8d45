//! Token Claims
//!
//! Claims carried inside signed access and refresh tokens.

use kernel::Principal;
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_role::UserRole;

/// Which of the pair a token is; never interchangeable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: UserId,
    pub email: String,
    pub role: UserRole,
    pub kind: TokenKind,
    pub issued_at_ms: i64,
    pub expires_at_ms: i64,
}

impl TokenClaims {
    #[inline]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.sub,
            email: self.email.clone(),
            is_admin: self.role.is_admin(),
        }
    }
}

/// Freshly issued access + refresh tokens
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at_ms: i64,
    pub refresh_expires_at_ms: i64,
}
