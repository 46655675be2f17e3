//! Collision-safe search regex synthesis for item stash catalogs.
//!
//! Given a set of target names and a disjoint set of non-target names, this
//! crate synthesizes a small set of regex entries such that every target
//! matches at least one entry, no non-target matches any entry, and no entry
//! exceeds a configured character budget. Emitted patterns use only escaped
//! literals, anchors, alternation, and non-capturing groups — they are meant
//! to be pasted into a search box, not fed back into this crate.
//!
//! The pipeline runs six deterministic stages: input normalization,
//! collision-safe candidate generation, greedy set cover, reversed-trie
//! suffix compaction, length-bounded packing, and a final two-sided
//! re-validation of the compiled entries. Each invocation is a pure function
//! of its inputs and configuration.
//!
//! # Quick start
//!
//! ```
//! use stash_regex::{GeneratorConfig, MatchMode, RegexGenerator};
//!
//! let engine = RegexGenerator::with_config(
//!     GeneratorConfig::new().with_match_mode(MatchMode::Compact),
//! );
//! let output = engine
//!     .generate(&["Chaos Orb", "Divine Orb"], &["Orb of Storms"])
//!     .unwrap();
//! assert!(!output.entries.is_empty());
//! ```

pub mod candidate;
pub mod catalog;
pub mod compact;
pub mod cover;
pub mod error;
pub mod escape;
pub mod normalize;
pub mod pack;
pub mod pipeline;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{GenerateError, GenerateResult};
pub use pipeline::{generate_regex, RegexGenerator};
pub use types::{GeneratorConfig, MatchMode, RegexOutput};
