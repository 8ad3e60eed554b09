//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use rush_core::rng::DeterministicRng;
use rush_sampling::domain::bucket_table::BucketTable;
use rush_store::schema::CREATE_PUZZLE_TABLE;
use rush_store::sqlite_record_repository::SqliteRecordRepository;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use rush_api::state::AppState;

/// Board used for every seeded row; only `moves` varies.
pub const BOARD: &str = "IBBxooIooLDDJAALooJoKEEMFFKooMGGHHHM";

/// In-memory dataset with `rows` puzzles. Row `n` has `moves = n` and
/// `cluster_size = 10 * n`, so a response identifies the rowid it came from.
pub async fn seeded_pool(rows: i64) -> SqlitePool {
    // A single connection that never expires keeps the in-memory database alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(CREATE_PUZZLE_TABLE).execute(&pool).await.unwrap();
    for n in 1..=rows {
        sqlx::query("INSERT INTO rush (rowid, moves, board, cluster_size) VALUES (?, ?, ?, ?)")
            .bind(n)
            .bind(n)
            .bind(BOARD)
            .bind(n * 10)
            .execute(&pool)
            .await
            .unwrap();
    }
    pool
}

/// A table where every bucket holds `count` rows.
pub fn uniform_table(count: u32) -> BucketTable {
    BucketTable::new(vec![count; 61]).unwrap()
}

/// Build the full app router over `pool`, reading table `table`.
pub fn build_test_app(
    pool: SqlitePool,
    table_name: &str,
    bucket_table: BucketTable,
    rng: impl DeterministicRng + Send + 'static,
) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let repository = Arc::new(SqliteRecordRepository::new(pool, table_name).unwrap());
    rush_api::app(AppState::new(bucket_table, rng, repository))
}

/// Send a GET request and return status, headers, and the raw body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("origin", "https://example.test")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body_bytes)
}

/// Send a GET request and return status, headers, and the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, HeaderMap, serde_json::Value) {
    let (status, headers, body) = get(app, uri).await;
    (status, headers, serde_json::from_slice(&body).unwrap())
}
