//! Error taxonomy for the generation pipeline.
//!
//! Every stage returns `Result<_, GenerateError>`; the runner short-circuits
//! on the first failure and hands the error to the caller unchanged. Messages
//! are written to be surfaced verbatim by a UI or CLI layer — the core never
//! logs or prints.

use thiserror::Error;

/// Result alias used throughout the pipeline.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// A terminal failure of one pipeline invocation.
///
/// No partial entries are ever returned alongside an error, and retrying
/// with identical inputs produces the identical error — the computation is
/// deterministic and pure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The target set was empty after filtering out empty strings.
    #[error("No targets provided.")]
    NoTargets,

    /// A name is both a target and a non-target under the active case
    /// policy, so no pattern set can satisfy both sides.
    #[error("Target and non-target names overlap under the active case policy: '{example}'.")]
    Overlap { example: String },

    /// An unrecognized match-mode name at the string-parsing boundary.
    #[error("Unsupported match mode: {0}")]
    UnsupportedMode(String),

    /// The configured maximum entry length is zero.
    #[error("Max length must be positive.")]
    InvalidMaxLength,

    /// A single irreducible fragment exceeds the entry budget; no packing
    /// arrangement can help.
    #[error("Single pattern exceeds max length: '{fragment}'.")]
    OversizeFragment { fragment: String },

    /// Greedy set cover ran out of useful candidates. The `needs_exact`
    /// fallback should make this unreachable; surfacing it loudly beats
    /// emitting a pattern set with holes.
    #[error("Unable to cover all targets with collision-safe patterns.")]
    Uncoverable,

    /// The validator had no entries to check.
    #[error("No regex entries generated.")]
    NoEntries,

    /// A final entry failed to compile.
    #[error("Invalid regex '{entry}': {detail}")]
    InvalidEntry { entry: String, detail: String },

    /// A target slipped through uncovered — the compiled entries missed it.
    #[error("Regex does not match target '{name}'.")]
    UnmatchedTarget { name: String },

    /// A non-target leaked — some compiled entry matches it.
    #[error("Regex matches non-target '{name}'.")]
    MatchedNonTarget { name: String },
}
