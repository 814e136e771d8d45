//! HTTP Handlers

use axum::extract::State;
use kernel::Envelope;
use kernel::error::app_error::{AppResult, ResultExt};
use kernel::extract::ValidJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    DeleteUserUseCase, RefreshUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::presentation::dto::{
    CredentialsRequest, DeleteUserRequest, DeleteUserResponse, RefreshRequest, RegisterResponse,
    TokenPairResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<CredentialsRequest>,
) -> AppResult<Envelope<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            email: req.email,
            password: req.password,
        })
        .await
        .or_fail("Failed to register user")?;

    Ok(Envelope::ok(
        "User registered",
        RegisterResponse {
            user_id: output.user_id.to_string(),
            email: output.email.into_inner(),
            role: output.role.code().to_string(),
        },
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<CredentialsRequest>,
) -> AppResult<Envelope<TokenPairResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let pair = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await
        .or_fail("Failed to sign in")?;

    Ok(Envelope::ok("Signed in", pair.into()))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<RefreshRequest>,
) -> AppResult<Envelope<TokenPairResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(state.repo.clone(), state.config.clone());

    let pair = use_case
        .execute(&req.refresh_token)
        .await
        .or_fail("Failed to refresh tokens")?;

    Ok(Envelope::ok("Tokens refreshed", pair.into()))
}

// ============================================================================
// Admin: delete user
// ============================================================================

/// DELETE /api/admin/delete-user
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<DeleteUserRequest>,
) -> AppResult<Envelope<DeleteUserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let deleted_count = DeleteUserUseCase::new(state.repo.clone())
        .execute(&req.email)
        .await
        .or_fail("Failed to delete user")?;

    let message = if deleted_count > 0 {
        "User deleted"
    } else {
        "No user found with that email"
    };

    Ok(Envelope::ok(message, DeleteUserResponse { deleted_count }))
}
