//! Health Check
//!
//! `GET /api/health` reports service metadata and whether the database
//! answers a trivial query.

use std::sync::Arc;

use axum::extract::State;
use kernel::Envelope;
use serde::Serialize;
use sqlx::PgPool;

#[trait_variant::make(DatabaseProbe: Send)]
pub trait LocalDatabaseProbe {
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

impl DatabaseProbe for PgPool {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(self).await.map(|_| ())
    }
}

pub struct HealthState<P> {
    pub probe: Arc<P>,
    pub environment: String,
    pub version: String,
}

impl<P> Clone for HealthState<P> {
    fn clone(&self) -> Self {
        Self {
            probe: self.probe.clone(),
            environment: self.environment.clone(),
            version: self.version.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
    pub database: &'static str,
}

pub async fn health<P>(State(state): State<HealthState<P>>) -> Envelope<HealthData>
where
    P: DatabaseProbe + Sync + 'static,
{
    let probe = state.probe.ping().await;
    let data = |status, database| HealthData {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: state.environment.clone(),
        version: state.version.clone(),
        database,
    };

    match probe {
        Ok(()) => Envelope::ok("Server is healthy", data("healthy", "connected")),
        Err(e) => {
            tracing::error!(error = %e, "Health check database probe failed");
            Envelope::failure_with_data(
                "Database connection failed",
                data("unhealthy", "disconnected"),
                Some(e.to_string()),
            )
        }
    }
}
