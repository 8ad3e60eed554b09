//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The sampled row identifier has no matching record in the dataset.
    #[error("no record for rowid {rowid} sampled from bucket {bucket}")]
    RecordNotFound {
        /// The bucket that was drawn.
        bucket: usize,
        /// The row identifier drawn within that bucket.
        rowid: u32,
    },

    /// The bucket weight table cannot be sampled from.
    #[error("invalid bucket table: {0}")]
    InvalidBucketTable(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
