//! Query handlers for the sampling context.

use std::sync::Mutex;

use rush_core::error::DomainError;
use rush_core::record::{Record, RecordRepository};
use rush_core::rng::DeterministicRng;
use tracing::debug;

use crate::domain::bucket_table::BucketTable;
use crate::domain::sampler::{Sample, sample};

/// A record together with the draw that selected it.
#[derive(Debug, Clone)]
pub struct SampledRecord {
    /// The bucket and rowid that were drawn.
    pub sample: Sample,
    /// The dataset row stored at the drawn rowid.
    pub record: Record,
}

/// Draws a rowid from `table` and loads the matching record.
///
/// The `Mutex` is locked only around the synchronous draw to avoid holding a
/// `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError::RecordNotFound` if the dataset has no row at the
/// drawn rowid, or `DomainError::Infrastructure` if the RNG mutex is poisoned
/// or the repository lookup fails.
pub async fn handle_random_record(
    table: &BucketTable,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn RecordRepository,
) -> Result<SampledRecord, DomainError> {
    let drawn = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        sample(table, &mut *rng_guard)?
    };

    debug!(bucket = drawn.bucket, rowid = drawn.rowid, "sampled puzzle rowid");

    let record = repo
        .find_by_rowid(i64::from(drawn.rowid))
        .await?
        .ok_or(DomainError::RecordNotFound {
            bucket: drawn.bucket,
            rowid: drawn.rowid,
        })?;

    Ok(SampledRecord {
        sample: drawn,
        record,
    })
}
