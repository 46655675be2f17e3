//! Two-sided validation — stage 6 of the pipeline.
//!
//! Greedy selection, compaction, and first-fit packing are all
//! approximations; this stage is the correctness backstop. Every final entry
//! is compiled and re-run against both input sets before a result is allowed
//! out. It runs unconditionally on every success path.

use regex::{Regex, RegexBuilder};

use crate::error::{GenerateError, GenerateResult};

/// Compile every entry and assert full target coverage and zero non-target
/// leakage.
///
/// Fails on the first violation with an error naming the offending string;
/// there is no partial recovery.
pub fn validate_entries<S: AsRef<str>>(
    entries: &[S],
    targets: &[String],
    non_targets: &[String],
    case_insensitive: bool,
) -> GenerateResult<()> {
    let entries: Vec<&str> = entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.is_empty() {
        return Err(GenerateError::NoEntries);
    }

    let mut compiled: Vec<Regex> = Vec::with_capacity(entries.len());
    for entry in entries {
        let regex = RegexBuilder::new(entry)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|err| GenerateError::InvalidEntry {
                entry: entry.to_string(),
                detail: err.to_string(),
            })?;
        compiled.push(regex);
    }

    for name in targets {
        if !compiled.iter().any(|regex| regex.is_match(name)) {
            return Err(GenerateError::UnmatchedTarget { name: name.clone() });
        }
    }

    for name in non_targets {
        if compiled.iter().any(|regex| regex.is_match(name)) {
            return Err(GenerateError::MatchedNonTarget { name: name.clone() });
        }
    }

    Ok(())
}
