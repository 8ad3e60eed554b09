//! Shared application state.

use std::sync::{Arc, Mutex};

use rush_core::record::RecordRepository;
use rush_core::rng::DeterministicRng;
use rush_sampling::domain::bucket_table::BucketTable;

/// Application state shared across all request handlers.
///
/// Nothing here is mutated per request except the RNG, which is locked only
/// for the duration of a draw.
#[derive(Clone)]
pub struct AppState {
    /// Validated bucket weight table.
    pub bucket_table: Arc<BucketTable>,
    /// Random source for the sampler.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Point-lookup access to the puzzle dataset.
    pub record_repository: Arc<dyn RecordRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        bucket_table: BucketTable,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        record_repository: Arc<dyn RecordRepository>,
    ) -> Self {
        Self {
            bucket_table: Arc::new(bucket_table),
            rng,
            record_repository,
        }
    }
}
