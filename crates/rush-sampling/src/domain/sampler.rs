//! Two-stage sampler: a uniform bucket, then a uniform rowid inside it.
//!
//! The bucket draw is deliberately not weighted by bucket size. Every
//! reachable bucket is equally likely, so the output favours hard puzzles
//! far more than their share of the dataset would.

use rush_core::error::DomainError;
use rush_core::rng::DeterministicRng;

use crate::domain::bucket_table::{BucketTable, MAX_BUCKET, MIN_BUCKET};

/// One draw from the sampler. Lives for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// The bucket that was drawn.
    pub bucket: usize,
    /// The 1-based row identifier drawn within the bucket.
    pub rowid: u32,
}

/// Draws a bucket uniformly from the reachable range, then a rowid uniformly
/// from `[1, count(bucket)]`. Consumes exactly two values from `rng`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if `rng` produces a bucket outside
/// the reachable range or a rowid outside the bucket, which only happens
/// when the RNG ignores its bounds.
pub fn sample(table: &BucketTable, rng: &mut dyn DeterministicRng) -> Result<Sample, DomainError> {
    #[allow(clippy::cast_possible_truncation)]
    let bucket = rng.next_u32_range(MIN_BUCKET as u32, MAX_BUCKET as u32) as usize;

    let count = table
        .count(bucket)
        .filter(|_| BucketTable::reachable().contains(&bucket))
        .ok_or_else(|| {
            DomainError::Infrastructure(format!("rng produced unreachable bucket {bucket}"))
        })?;

    let rowid = rng.next_u32_range(1, count);
    if rowid == 0 || rowid > count {
        return Err(DomainError::Infrastructure(format!(
            "rng produced rowid {rowid} outside bucket {bucket} (1..={count})"
        )));
    }

    Ok(Sample { bucket, rowid })
}
