//! Assessment Routers
//!
//! Guards are layered by the caller: `admin_router` behind the admin
//! guard, `exam_router` behind the access-token guard.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AssessmentConfig;
use crate::domain::repository::{QuestionRepository, SubmissionRepository};
use crate::presentation::handlers::{self, AssessmentAppState};

/// Catalogue management, nested under `/api/admin`
pub fn admin_router<R>(repo: Arc<R>, config: Arc<AssessmentConfig>) -> Router
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/seed-questions", post(handlers::seed_questions::<R>))
        .with_state(AssessmentAppState { repo, config })
}

/// Debug helpers, nested under `/api/debug`
pub fn debug_router<R>(repo: Arc<R>, config: Arc<AssessmentConfig>) -> Router
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/sample-questions", get(handlers::sample_questions::<R>))
        .with_state(AssessmentAppState { repo, config })
}

/// Exam-taking routes, nested under `/api/assessments`
pub fn exam_router<R>(repo: Arc<R>, config: Arc<AssessmentConfig>) -> Router
where
    R: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/{assessment_id}/questions", get(handlers::list_questions::<R>))
        .route("/{assessment_id}/submissions", post(handlers::submit_answers::<R>))
        .with_state(AssessmentAppState { repo, config })
}
