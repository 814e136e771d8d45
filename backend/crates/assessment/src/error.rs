//! Assessment Error Types
//!
//! This module provides assessment-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Assessment-specific result type alias
pub type AssessmentResult<T> = Result<T, AssessmentError>;

/// Assessment-specific error variants
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// Path segment is not a known step
    #[error("Unknown assessment: {0}")]
    UnknownAssessment(String),

    /// Step has no stored questions
    #[error("Assessment has no questions")]
    EmptyAssessment,

    /// Answer refers to a question outside the assessment
    #[error("Question {0} is not part of this assessment")]
    UnknownQuestion(String),

    /// Same question answered twice in one submission
    #[error("Question {0} answered more than once")]
    DuplicateAnswer(String),

    /// Submission id already used by another candidate or assessment
    #[error("Submission id already used")]
    SubmissionConflict,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssessmentError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssessmentError::UnknownAssessment(_) | AssessmentError::EmptyAssessment => {
                ErrorKind::NotFound
            }
            AssessmentError::UnknownQuestion(_) | AssessmentError::DuplicateAnswer(_) => {
                ErrorKind::BadRequest
            }
            AssessmentError::SubmissionConflict => ErrorKind::Conflict,
            AssessmentError::Database(_) | AssessmentError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AssessmentError::Database(e) => {
                tracing::error!(error = %e, "Assessment database error");
            }
            AssessmentError::Internal(msg) => {
                tracing::error!(message = %msg, "Assessment internal error");
            }
            AssessmentError::SubmissionConflict => {
                tracing::warn!("Submission id reused across candidates or assessments");
            }
            _ => {
                tracing::debug!(error = %self, "Assessment error");
            }
        }
    }
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        err.log();
        let kind = err.kind();
        match err {
            AssessmentError::Database(e) => AppError::from(e),
            AssessmentError::Internal(msg) => AppError::new(kind, "Internal error").with_detail(msg),
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for AssessmentError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
