//! Auth Routers

use axum::{
    Router,
    routing::{delete, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Public auth routes, nested under `/api/auth`
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .with_state(state)
}

/// Admin user-management routes, nested under `/api/admin`
///
/// Unguarded on its own; the caller layers `require_admin` on the merged
/// admin router.
pub fn admin_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/delete-user", delete(handlers::delete_user::<R>))
        .with_state(state)
}
