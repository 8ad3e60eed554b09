//! Sampling domain: the bucket weight table and the two-stage sampler.

pub mod bucket_table;
pub mod sampler;
