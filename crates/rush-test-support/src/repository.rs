//! Test repositories — mock `RecordRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rush_core::error::DomainError;
use rush_core::record::{Record, RecordRepository};
use serde_json::json;

/// Builds a record shaped like a row of the `rush` puzzle table.
#[must_use]
pub fn puzzle_record(moves: i64, board: &str, cluster_size: i64) -> Record {
    let mut record = Record::new();
    record.insert("moves", json!(moves));
    record.insert("board", json!(board));
    record.insert("cluster_size", json!(cluster_size));
    record
}

/// A repository that serves a fixed set of records keyed by rowid.
#[derive(Debug, Default)]
pub struct StaticRecordRepository {
    records: HashMap<i64, Record>,
}

impl StaticRecordRepository {
    /// Create a repository holding `records`.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = (i64, Record)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

#[async_trait]
impl RecordRepository for StaticRecordRepository {
    async fn find_by_rowid(&self, rowid: i64) -> Result<Option<Record>, DomainError> {
        Ok(self.records.get(&rowid).cloned())
    }
}

/// A repository that records every rowid it is asked for and answers every
/// lookup with the same configured record.
#[derive(Debug)]
pub struct RecordingRecordRepository {
    record: Record,
    requested: Mutex<Vec<i64>>,
}

impl RecordingRecordRepository {
    /// Create a recording repository that returns `record` for every rowid.
    #[must_use]
    pub fn new(record: Record) -> Self {
        Self {
            record,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the rowids that were looked up, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_rowids(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordRepository for RecordingRecordRepository {
    async fn find_by_rowid(&self, rowid: i64) -> Result<Option<Record>, DomainError> {
        self.requested.lock().unwrap().push(rowid);
        Ok(Some(self.record.clone()))
    }
}

/// A repository with no rows. Useful for testing the "sampled rowid is
/// missing from the dataset" path.
#[derive(Debug)]
pub struct EmptyRecordRepository;

#[async_trait]
impl RecordRepository for EmptyRecordRepository {
    async fn find_by_rowid(&self, _rowid: i64) -> Result<Option<Record>, DomainError> {
        Ok(None)
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingRecordRepository;

#[async_trait]
impl RecordRepository for FailingRecordRepository {
    async fn find_by_rowid(&self, _rowid: i64) -> Result<Option<Record>, DomainError> {
        Err(DomainError::Infrastructure("unable to open database file".into()))
    }
}
