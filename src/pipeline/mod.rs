//! Pipeline orchestration.
//!
//! The runner threads a [`crate::types::GeneratorConfig`] through the six
//! generation stages and short-circuits on the first stage error.

pub mod runner;

pub use runner::{generate_regex, RegexGenerator};
