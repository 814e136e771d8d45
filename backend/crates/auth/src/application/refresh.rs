//! Refresh Use Case
//!
//! Exchanges a valid refresh token for a new token pair. The subject must
//! still exist, so deleted users cannot keep refreshing.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_service::TokenService;
use crate::domain::entity::token::{TokenKind, TokenPair};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct RefreshUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RefreshUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let tokens = TokenService::new(self.config.clone());
        let claims = tokens.verify(refresh_token, TokenKind::Refresh)?;

        let user = self
            .repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AuthError::UserGone)?;

        tracing::debug!(user_id = %user.user_id, "Token pair refreshed");

        tokens.issue_pair(&user)
    }
}
