//! Shared test mocks and utilities for the Rush Hour puzzle server.

mod repository;
mod rng;

pub use repository::{
    EmptyRecordRepository, FailingRecordRepository, RecordingRecordRepository,
    StaticRecordRepository, puzzle_record,
};
pub use rng::{MockRng, SequenceRng};
