//! Rush Hour puzzle server — HTTP layer.
//!
//! Serves one randomly drawn puzzle per request from a read-only SQLite
//! dataset.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full application router.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::random::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
