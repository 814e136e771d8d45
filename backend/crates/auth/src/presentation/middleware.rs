//! Auth Middleware
//!
//! Bearer-token guards composed onto routers with
//! `axum::middleware::from_fn_with_state`. On success the verified
//! [`Principal`](kernel::Principal) is placed in request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::headers::extract_bearer_token;
use std::sync::Arc;

use crate::application::CheckAccessUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGuardState {
    pub config: Arc<AuthConfig>,
}

impl AuthGuardState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Requires a valid access token
pub async fn require_access_token(
    State(state): State<AuthGuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let use_case = CheckAccessUseCase::new(state.config.clone());
    let principal = use_case.execute(extract_bearer_token(req.headers()))?;

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

/// Requires a valid access token carrying the admin role
pub async fn require_admin(
    State(state): State<AuthGuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let use_case = CheckAccessUseCase::new(state.config.clone());
    let principal = use_case.execute_admin(extract_bearer_token(req.headers()))?;

    tracing::debug!(user_id = %principal.user_id, path = %req.uri().path(), "Admin access");

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}
