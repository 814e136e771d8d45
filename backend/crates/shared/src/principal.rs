//! Authenticated Principal
//!
//! The identity attached to a request once its access token has been
//! verified. Inserted into request extensions by the auth guard and read by
//! handlers of other domains.

use crate::id::UserId;

/// Verified caller identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub email: String,
    pub is_admin: bool,
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| crate::error::app_error::AppError::unauthorized("Authentication required"))
    }
}
