//! Rush Store — read-only SQLite access to the puzzle dataset.

pub mod row;
pub mod schema;
pub mod sqlite_record_repository;
