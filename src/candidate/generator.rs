//! Candidate map construction: collision filtering and the exact fallback.
//!
//! A suffix survives only if its normalized form is not a suffix of any
//! non-target. A target falls back to a fully-anchored exact candidate in
//! two cases, checked in this order:
//!
//! 1. its whole normalized name is itself a suffix of some non-target
//!    (a suffix fragment could never distinguish them), then
//! 2. after filtering, no surviving suffix covers it at all.
//!
//! When several raw suffixes normalize to the same key, the
//! lexicographically smallest raw form is kept as the representative, which
//! keeps the output independent of input ordering.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::candidate::suffix::{is_balanced_suffix, suffix_set, suffixes};
use crate::escape::escape;
use crate::normalize::{normalize_name, NormalizedInput};
use crate::types::{Candidate, GeneratorConfig, MatchMode};

/// Generate all collision-safe candidates for balanced/compact mode.
///
/// The returned vector is sorted by key so downstream scans are
/// deterministic regardless of hash-map iteration order.
pub fn generate_candidates(input: &NormalizedInput, config: &GeneratorConfig) -> Vec<Candidate> {
    let non_target_suffixes = suffix_set(input.non_targets_norm.iter().map(String::as_str));

    // normalized suffix -> target indices it covers
    let mut candidate_map: FxHashMap<String, FxHashSet<usize>> = FxHashMap::default();
    // normalized suffix -> smallest raw form seen
    let mut representative: FxHashMap<String, String> = FxHashMap::default();
    let mut needs_exact: FxHashSet<usize> = FxHashSet::default();

    for (index, raw) in input.targets_raw.iter().enumerate() {
        let normalized = &input.targets_norm[index];
        if non_target_suffixes.contains(normalized.as_str()) {
            needs_exact.insert(index);
        }

        for suffix_raw in suffixes(raw) {
            if config.match_mode == MatchMode::Balanced
                && !is_balanced_suffix(
                    suffix_raw,
                    config.min_single_word_suffix_len,
                    config.min_multi_word_suffix_len,
                )
            {
                continue;
            }
            let suffix_norm = normalize_name(suffix_raw, config.case_insensitive);
            if non_target_suffixes.contains(suffix_norm.as_str()) {
                continue;
            }

            candidate_map
                .entry(suffix_norm.clone())
                .or_default()
                .insert(index);

            representative
                .entry(suffix_norm)
                .and_modify(|existing| {
                    if suffix_raw < existing.as_str() {
                        *existing = suffix_raw.to_string();
                    }
                })
                .or_insert_with(|| suffix_raw.to_string());
        }
    }

    let covered: FxHashSet<usize> = candidate_map.values().flatten().copied().collect();
    for index in 0..input.targets_raw.len() {
        if !covered.contains(&index) {
            needs_exact.insert(index);
        }
    }

    let mut candidates: Vec<Candidate> = Vec::with_capacity(candidate_map.len() + needs_exact.len());

    for (suffix_norm, covers) in candidate_map {
        let key = representative
            .remove(&suffix_norm)
            .unwrap_or(suffix_norm);
        let pattern = format!("{}$", escape(&key));
        candidates.push(Candidate {
            key,
            pattern,
            covers,
            is_suffix: true,
        });
    }

    let mut exact_indices: Vec<usize> = needs_exact.into_iter().collect();
    exact_indices.sort_unstable();
    for index in exact_indices {
        let raw = &input.targets_raw[index];
        let pattern = format!("^{}$", escape(raw));
        candidates.push(Candidate {
            key: raw.clone(),
            pattern,
            covers: FxHashSet::from_iter([index]),
            is_suffix: false,
        });
    }

    candidates.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.pattern.cmp(&b.pattern)));
    candidates
}
