//! Rush Hour puzzle server — bucketed random puzzle selection.
//!
//! Responsible for drawing a puzzle row identifier from the fixed bucket
//! weight table and resolving it against the puzzle dataset.

pub mod application;
pub mod domain;
