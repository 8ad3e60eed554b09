//! `SQLite` implementation of the `RecordRepository` trait.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use rush_core::error::DomainError;
use rush_core::record::{Record, RecordRepository};

use crate::row::row_to_record;
use crate::schema::{select_by_rowid_sql, validate_table_name};

/// Opens the dataset at `url` read-only. The file must already exist.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is malformed or the database cannot be
/// opened.
pub async fn connect_read_only(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .read_only(true)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// SQLite-backed record repository.
#[derive(Debug, Clone)]
pub struct SqliteRecordRepository {
    pool: SqlitePool,
    select_sql: String,
}

impl SqliteRecordRepository {
    /// Creates a repository reading rows from `table`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `table` is not a plain identifier.
    pub fn new(pool: SqlitePool, table: &str) -> Result<Self, DomainError> {
        let table = validate_table_name(table)?;
        Ok(Self {
            pool,
            select_sql: select_by_rowid_sql(table),
        })
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    async fn find_by_rowid(&self, rowid: i64) -> Result<Option<Record>, DomainError> {
        // The pooled connection goes back to the pool when `conn` drops,
        // on the error paths as well.
        let mut conn = self.pool.acquire().await.map_err(|e| {
            DomainError::Infrastructure(format!("failed to acquire connection: {e}"))
        })?;

        let row = sqlx::query(&self.select_sql)
            .bind(rowid)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("rowid lookup failed: {e}")))?;

        debug!(rowid, found = row.is_some(), "rowid lookup");

        row.as_ref()
            .map(row_to_record)
            .transpose()
            .map_err(|e| DomainError::Infrastructure(format!("row decoding failed: {e}")))
    }
}
