//! Rush Hour puzzle server entry point.

use std::sync::{Arc, Mutex};

use rush_api::config::Config;
use rush_api::error::AppError;
use rush_api::state::AppState;
use rush_core::rng::{DeterministicRng, SystemRng};
use rush_sampling::domain::bucket_table::{BucketTable, PUZZLE_COUNTS};
use rush_store::sqlite_record_repository::{SqliteRecordRepository, connect_read_only};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Rush Hour puzzle server");

    let config = Config::from_env()?;

    // Refuse to start on an unusable table rather than fail per request.
    let bucket_table = BucketTable::new(PUZZLE_COUNTS.to_vec())?;

    let pool = connect_read_only(&config.database_url, config.max_connections).await?;
    let record_repository = SqliteRecordRepository::new(pool, &config.table)?;
    tracing::info!(
        database_url = %config.database_url,
        table = %config.table,
        "Opened puzzle dataset read-only"
    );

    let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
        Arc::new(Mutex::new(SystemRng::from_entropy()));
    let app_state = AppState::new(bucket_table, rng, Arc::new(record_repository));

    let app = rush_api::app(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
