//! Dataset records and the repository abstraction used to read them.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DomainError;

/// One row of the dataset, keyed by column name.
///
/// Columns keep insertion order, which for rows read from the dataset is the
/// result-set order. Serializes as a flat JSON object in that order, so the
/// same record always serializes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    columns: Map<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any previous value for that column.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }

    /// Returns the value of a column, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Iterates over the column names.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(columns: Map<String, Value>) -> Self {
        Self { columns }
    }
}

/// Repository trait for point lookups against the read-only dataset.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Load the record stored at `rowid`, or `None` if no such row exists.
    async fn find_by_rowid(&self, rowid: i64) -> Result<Option<Record>, DomainError>;
}
