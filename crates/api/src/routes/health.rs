//! Liveness probe for the game server and deployment checks.
//!
//! Mounted at `/health`, outside `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Which transport turn notifications go through (`smtp`, `log`, ...).
    pub mail_transport: &'static str,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match agot_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        mail_transport: state.mailer.name(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
