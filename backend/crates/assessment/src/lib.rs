//! Assessment Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Questions, submissions, grading, the seed catalogue
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers and routers
//!
//! ## Routes
//! - `POST /api/admin/seed-questions` - upsert the built-in catalogue
//! - `GET /api/debug/sample-questions` - first few stored questions
//! - `GET /api/assessments/{assessmentId}/questions` - exam questions, no answers
//! - `POST /api/assessments/{assessmentId}/submissions` - grade and store once
//!
//! ## Grading Model
//! - The server is the only holder of correct answers; candidates never see them
//! - Submissions are keyed by a client-generated id, so a retried submit
//!   returns the stored result instead of creating a second record

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AssessmentConfig;
pub use error::{AssessmentError, AssessmentResult};
pub use infra::memory::InMemoryAssessmentRepository;
pub use infra::postgres::PgAssessmentRepository;
pub use presentation::router::{admin_router, debug_router, exam_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, ResultExt},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
