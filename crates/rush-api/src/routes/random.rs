//! GET /random.json — one randomly drawn puzzle.

use axum::extract::State;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use rush_sampling::application::query_handlers;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /random.json
///
/// Responds with the drawn row as a flat JSON object, or an error body if the
/// lookup fails. Never a partial record.
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
async fn random_puzzle(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sampled = query_handlers::handle_random_record(
        &state.bucket_table,
        &state.rng,
        &*state.record_repository,
    )
    .await
    .inspect_err(|e| warn!(error = %e, "random puzzle lookup failed"))?;

    info!(
        bucket = sampled.sample.bucket,
        rowid = sampled.sample.rowid,
        "serving random puzzle"
    );

    Ok(([(ACCESS_CONTROL_ALLOW_ORIGIN, "*")], Json(sampled.record)).into_response())
}

/// Returns the router for the random puzzle endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/random.json", get(random_puzzle))
}
