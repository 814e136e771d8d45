//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// Email failed validation
    #[error("{0}")]
    InvalidEmail(String),

    /// Password failed the registration policy
    #[error("Password validation failed: {0}")]
    PasswordPolicy(String),

    /// No bearer token on a protected route
    #[error("Authentication required")]
    TokenMissing,

    /// Malformed or forged token
    #[error("Invalid token")]
    TokenInvalid,

    /// Token past its expiry
    #[error("Token expired")]
    TokenExpired,

    /// Refresh token presented as access token or vice versa
    #[error("Wrong token type")]
    WrongTokenKind,

    /// Authenticated but not an admin
    #[error("Admin privileges required")]
    AdminRequired,

    /// Token subject no longer exists
    #[error("User no longer exists")]
    UserGone,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::WrongTokenKind
            | AuthError::UserGone => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidEmail(_) | AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::AdminRequired => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid | AuthError::WrongTokenKind => {
                tracing::warn!(error = %self, "Rejected token");
            }
            AuthError::AdminRequired => {
                tracing::warn!("Non-admin access to admin route");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        let kind = err.kind();
        match err {
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::new(kind, "Internal error").with_detail(msg),
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
