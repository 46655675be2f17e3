//! Candidate pattern generation — stage 2 of the pipeline.
//!
//! Enumerates collision-safe suffix fragments for every target and falls
//! back to fully-anchored exact fragments where no safe suffix exists.

pub mod generator;
pub mod suffix;

pub use generator::generate_candidates;
