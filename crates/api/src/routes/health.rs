use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the catalog keyspace is reachable.
    pub catalog_healthy: bool,
}

/// GET /health -- returns service and catalog health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_healthy = librarium_db::health_check(&state.catalog).await.is_ok();

    let status = if catalog_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        catalog_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/catalog`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
