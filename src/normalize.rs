//! Input normalization — stage 1 of the pipeline.
//!
//! Dedupes and sorts both name sets, computes their case-folded projections,
//! and rejects inputs no pattern set could ever satisfy: an empty target set,
//! or a name that is required to match and not match at the same time.

use rustc_hash::FxHashSet;

use crate::error::{GenerateError, GenerateResult};

/// Case-fold a name according to the active case policy.
pub fn normalize_name(name: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}

/// Normalized view of both input sets.
///
/// Raw vectors are deduplicated and sorted; `targets_norm` is index-aligned
/// with `targets_raw`. Owned by a single pipeline run.
#[derive(Debug)]
pub struct NormalizedInput {
    pub targets_raw: Vec<String>,
    pub non_targets_raw: Vec<String>,
    pub targets_norm: Vec<String>,
    pub non_targets_norm: Vec<String>,
}

/// Build the normalized input or fail with [`GenerateError::NoTargets`] /
/// [`GenerateError::Overlap`].
pub fn normalize<S: AsRef<str>>(
    targets: &[S],
    non_targets: &[S],
    case_insensitive: bool,
) -> GenerateResult<NormalizedInput> {
    let targets_raw = dedup_sorted(targets);
    let non_targets_raw = dedup_sorted(non_targets);

    if targets_raw.is_empty() {
        return Err(GenerateError::NoTargets);
    }

    let targets_norm: Vec<String> = targets_raw
        .iter()
        .map(|name| normalize_name(name, case_insensitive))
        .collect();
    let non_targets_norm: Vec<String> = non_targets_raw
        .iter()
        .map(|name| normalize_name(name, case_insensitive))
        .collect();

    let non_target_set: FxHashSet<&str> =
        non_targets_norm.iter().map(String::as_str).collect();
    // targets_norm follows the sorted raw order, so the first hit is not
    // necessarily the smallest normalized collision; pick it explicitly.
    let example = targets_norm
        .iter()
        .filter(|name| non_target_set.contains(name.as_str()))
        .min();
    if let Some(example) = example {
        return Err(GenerateError::Overlap {
            example: example.clone(),
        });
    }

    Ok(NormalizedInput {
        targets_raw,
        non_targets_raw,
        targets_norm,
        non_targets_norm,
    })
}

/// Drop empty strings, deduplicate, and sort lexicographically.
fn dedup_sorted<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = names
        .iter()
        .map(|name| name.as_ref().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
