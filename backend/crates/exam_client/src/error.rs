//! Client Error Types

use thiserror::Error;

use crate::session::SessionStatus;
use crate::storage::StorageError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Credential storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Blocking storage read was cancelled or panicked
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Request exceeded its time budget
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a failure envelope
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No stored access token for an authenticated call
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Cannot {action} while {from:?}")]
    InvalidTransition {
        from: SessionStatus,
        action: &'static str,
    },

    #[error("Assessment already submitted")]
    AlreadySubmitted,

    #[error("Assessment has no questions")]
    EmptyAssessment,

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Question index {0} out of range")]
    OutOfRange(usize),
}

impl ClientError {
    /// Whether repeating the same request can succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(_) | ClientError::Timeout => true,
            ClientError::Api { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            _ => false,
        }
    }
}
