//! Core types shared across pipeline stages.
//!
//! [`GeneratorConfig`] is an explicit value threaded through every call —
//! there is no module-level default singleton. [`RegexOutput`] is the public
//! success payload; everything else is pipeline-internal plumbing.

use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// How target names are turned into candidate patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// One fully-anchored pattern per target; no suffix candidates.
    Exact,
    /// Suffix candidates filtered by minimum-length and word-boundary rules
    /// for readability.
    Balanced,
    /// Any non-colliding suffix is eligible; favors the shortest output over
    /// readability.
    Compact,
}

impl MatchMode {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Balanced => "balanced",
            Self::Compact => "compact",
        }
    }
}

impl FromStr for MatchMode {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "balanced" => Ok(Self::Balanced),
            "compact" => Ok(Self::Compact),
            other => Err(GenerateError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum character length of each emitted entry.
    pub max_length: usize,
    /// Case-fold both sides before comparing and compile entries
    /// case-insensitively.
    pub case_insensitive: bool,
    /// Candidate generation strategy.
    pub match_mode: MatchMode,
    /// Minimum character length for a single-word suffix candidate
    /// (balanced mode only).
    pub min_single_word_suffix_len: usize,
    /// Minimum character length for a suffix candidate spanning multiple
    /// words (balanced mode only).
    pub min_multi_word_suffix_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_length: 250,
            case_insensitive: true,
            match_mode: MatchMode::Balanced,
            min_single_word_suffix_len: 5,
            min_multi_word_suffix_len: 8,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-entry character budget.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Set the candidate generation strategy.
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Set the balanced-mode minimum length for single-word suffixes.
    pub fn with_min_single_word_suffix_len(mut self, len: usize) -> Self {
        self.min_single_word_suffix_len = len;
        self
    }

    /// Set the balanced-mode minimum length for multi-word suffixes.
    pub fn with_min_multi_word_suffix_len(mut self, len: usize) -> Self {
        self.min_multi_word_suffix_len = len;
        self
    }
}

/// The validated, length-bounded pattern strings for one successful run.
///
/// Entries are ready to paste into a search box: already escaped, anchored,
/// and packed. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexOutput {
    pub entries: Vec<String>,
}

/// One candidate pattern fragment produced by the generator stage.
///
/// `key` is the canonical raw text the pattern was built from; it drives
/// tie-breaking in the selector and feeds the suffix compactor. `covers`
/// holds the target indices this candidate safely matches.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub key: String,
    pub pattern: String,
    pub covers: FxHashSet<usize>,
    pub is_suffix: bool,
}
