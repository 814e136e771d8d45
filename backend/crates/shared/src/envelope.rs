//! Response Envelope
//!
//! Every API route answers with the same JSON shape:
//! `{ "success": bool, "message": string, "data"?: object, "error"?: string }`.

use serde::{Deserialize, Serialize};

/// Uniform API response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Failed response, `error` holds the underlying detail when known
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error,
        }
    }

    /// Failed response that still reports `data` (e.g. an unhealthy probe)
    pub fn failure_with_data(message: impl Into<String>, data: T, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
            error,
        }
    }

    /// Unwrap the payload of a successful envelope
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}
