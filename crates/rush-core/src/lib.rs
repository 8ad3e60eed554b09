//! Rush Core — shared abstractions.
//!
//! This crate defines the traits and types the sampling and serving crates
//! depend on. It contains no infrastructure code.

pub mod error;
pub mod record;
pub mod rng;
