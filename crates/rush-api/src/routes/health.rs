//! Liveness endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use rush_sampling::domain::bucket_table::{MAX_BUCKET, MIN_BUCKET};
use serde::Serialize;

use crate::state::AppState;

/// Body of GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: &'static str,
    /// Crate version of the running server.
    pub version: &'static str,
    /// Inclusive bucket range the sampler draws from.
    pub buckets: [usize; 2],
    /// Entries in the loaded bucket table.
    pub table_len: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        buckets: [MIN_BUCKET, MAX_BUCKET],
        table_len: state.bucket_table.len(),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
