//! The bucket weight table.
//!
//! Puzzle rows are stored hardest-first, so bucket `n` covers rowids
//! `1..=count(n)`: every puzzle needing at least `n` moves.

use std::ops::RangeInclusive;

use rush_core::error::DomainError;

/// Lowest bucket the sampler can draw.
pub const MIN_BUCKET: usize = 15;

/// Highest bucket the sampler can draw.
pub const MAX_BUCKET: usize = 40;

/// Row counts of the published puzzle database, indexed by bucket.
///
/// Entry 0 counts puzzles needing at least zero moves, i.e. all of them, so it
/// repeats entry 1: no puzzle is solved in zero moves.
pub const PUZZLE_COUNTS: [u32; 61] = [
    2_577_412, 2_577_412, 2_577_411, 2_577_403, 2_577_227, 2_575_473, 2_563_823, 2_518_414,
    2_412_682, 2_236_460, 1_990_153, 1_696_046, 1_396_300, 1_128_432, 907_256, 727_035, 577_576,
    452_694, 349_953, 267_487, 202_610, 152_245, 113_712, 84_358, 62_386, 46_004, 33_870, 25_117,
    18_538, 13_786, 10_224, 7_757, 5_919, 4_458, 3_398, 2_537, 1_883, 1_395, 1_022, 776, 567, 425,
    326, 234, 171, 113, 85, 63, 47, 33, 23, 15, 13, 11, 8, 4, 2, 2, 2, 1, 1,
];

/// Immutable table of per-bucket row counts, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    counts: Vec<u32>,
}

impl BucketTable {
    /// Builds a table from raw counts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBucketTable` if the table is too short to
    /// address every reachable bucket, or if any reachable bucket is empty.
    pub fn new(counts: Vec<u32>) -> Result<Self, DomainError> {
        if counts.len() <= MAX_BUCKET {
            return Err(DomainError::InvalidBucketTable(format!(
                "expected at least {} entries, found {}",
                MAX_BUCKET + 1,
                counts.len()
            )));
        }

        if let Some(bucket) = Self::reachable().find(|&bucket| counts[bucket] == 0) {
            return Err(DomainError::InvalidBucketTable(format!(
                "bucket {bucket} has no rows"
            )));
        }

        Ok(Self { counts })
    }

    /// The production table for the published puzzle database.
    #[must_use]
    pub fn puzzle_counts() -> Self {
        Self {
            counts: PUZZLE_COUNTS.to_vec(),
        }
    }

    /// The buckets the sampler draws from.
    #[must_use]
    pub fn reachable() -> RangeInclusive<usize> {
        MIN_BUCKET..=MAX_BUCKET
    }

    /// Row count for `bucket`, if the table has such an entry.
    #[must_use]
    pub fn count(&self, bucket: usize) -> Option<u32> {
        self.counts.get(bucket).copied()
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
