//! Check Access Use Case
//!
//! Turns a bearer access token into a verified principal. Stateless: the
//! signature and expiry are the only checks, no storage is read.

use std::sync::Arc;

use kernel::Principal;

use crate::application::config::AuthConfig;
use crate::application::token_service::TokenService;
use crate::domain::entity::token::TokenKind;
use crate::error::{AuthError, AuthResult};

pub struct CheckAccessUseCase {
    tokens: TokenService,
}

impl CheckAccessUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            tokens: TokenService::new(config),
        }
    }

    pub fn execute(&self, bearer: Option<&str>) -> AuthResult<Principal> {
        let token = bearer.ok_or(AuthError::TokenMissing)?;
        let claims = self.tokens.verify(token, TokenKind::Access)?;
        Ok(claims.principal())
    }

    /// As [`execute`](Self::execute), additionally requiring the admin role
    pub fn execute_admin(&self, bearer: Option<&str>) -> AuthResult<Principal> {
        let principal = self.execute(bearer)?;
        if !principal.is_admin {
            return Err(AuthError::AdminRequired);
        }
        Ok(principal)
    }
}
