//! API Server
//!
//! Router composition for the assessment platform. `main` wires the
//! PostgreSQL implementations; tests wire the in-memory ones.
//!
//! ```text
//! /api/health                 health probe
//! /api/auth/*                 register, login, refresh
//! /api/admin/*                delete-user, seed-questions   (require_admin)
//! /api/debug/*                sample-questions              (when enabled)
//! /api/assessments/*          questions, submissions        (require_access_token)
//! ```

pub mod config;
pub mod health;

use std::sync::Arc;

use assessment::AssessmentConfig;
use assessment::domain::repository::{QuestionRepository, SubmissionRepository};
use auth::AuthGuardState;
use auth::domain::repository::UserRepository;
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;

pub use config::AppConfig;
pub use health::{DatabaseProbe, HealthState};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Compose every route group
pub fn build_router<U, A, P>(users: Arc<U>, assessments: Arc<A>, probe: Arc<P>, config: &AppConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    A: QuestionRepository + SubmissionRepository + Clone + Send + Sync + 'static,
    P: DatabaseProbe + Sync + 'static,
{
    let auth_config = Arc::new(config.auth_config());
    let assessment_config = Arc::new(AssessmentConfig::default());
    let guard = AuthGuardState::new(auth_config.clone());

    let health = Router::new()
        .route("/api/health", get(health::health::<P>))
        .with_state(HealthState {
            probe,
            environment: config.app_env.clone(),
            version: config.app_version.clone(),
        });

    let mut admin = auth::admin_router(users.clone(), auth_config.clone())
        .merge(assessment::admin_router(assessments.clone(), assessment_config.clone()));
    if config.admin_routes_require_auth {
        admin = admin.route_layer(from_fn_with_state(guard.clone(), auth::require_admin));
    } else {
        tracing::warn!("ADMIN_ROUTES_REQUIRE_AUTH=false: /api/admin is open to unauthenticated callers");
    }

    let exams = assessment::exam_router(assessments.clone(), assessment_config.clone())
        .route_layer(from_fn_with_state(guard, auth::require_access_token));

    let mut app = Router::new()
        .merge(health)
        .nest("/api/auth", auth::auth_router(users, auth_config))
        .nest("/api/admin", admin)
        .nest("/api/assessments", exams);

    if config.enable_debug_routes {
        app = app.nest("/api/debug", assessment::debug_router(assessments, assessment_config));
    }

    app
}
