//! Application layer for the sampling context.

pub mod query_handlers;
