//! Greedy weighted set cover — stage 3 of the pipeline.
//!
//! Exact set cover is NP-hard; a greedy pass with fixed tie-breaking is
//! fast, close enough in practice, and fully reproducible: permuting the
//! input target list cannot change the selection.

use rustc_hash::FxHashSet;

use crate::error::{GenerateError, GenerateResult};
use crate::escape::char_len;
use crate::types::Candidate;

/// Pick candidates until every target index is covered.
///
/// Each round selects the candidate with the largest number of still
/// uncovered indices; ties go to the shorter pattern, then to the smaller
/// key. Fails with [`GenerateError::Uncoverable`] if a round gains nothing;
/// the exact fallback in candidate generation should make that unreachable.
pub fn select_cover(
    candidates: &[Candidate],
    target_count: usize,
) -> GenerateResult<Vec<Candidate>> {
    let mut uncovered: FxHashSet<usize> = (0..target_count).collect();
    let mut selected: Vec<Candidate> = Vec::new();

    while !uncovered.is_empty() {
        let mut best: Option<&Candidate> = None;
        let mut best_gain = 0usize;

        for candidate in candidates {
            let gain = candidate
                .covers
                .iter()
                .filter(|index| uncovered.contains(index))
                .count();
            if gain == 0 {
                continue;
            }

            let better = match best {
                None => true,
                Some(current) => {
                    gain > best_gain
                        || (gain == best_gain
                            && (char_len(&candidate.pattern) < char_len(&current.pattern)
                                || (char_len(&candidate.pattern) == char_len(&current.pattern)
                                    && candidate.key < current.key)))
                }
            };
            if better {
                best = Some(candidate);
                best_gain = gain;
            }
        }

        let Some(best) = best else {
            return Err(GenerateError::Uncoverable);
        };

        for index in &best.covers {
            uncovered.remove(index);
        }
        selected.push(best.clone());
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(key: &str, pattern: &str, covers: &[usize], is_suffix: bool) -> Candidate {
        Candidate {
            key: key.to_string(),
            pattern: pattern.to_string(),
            covers: covers.iter().copied().collect(),
            is_suffix,
        }
    }

    #[test]
    fn test_prefers_largest_cover() {
        let candidates = vec![
            candidate("a", "a$", &[0], true),
            candidate("ba", "ba$", &[0, 1], true),
            candidate("c", "c$", &[2], true),
        ];
        let selected = select_cover(&candidates, 3).unwrap();
        assert_eq!(selected[0].key, "ba");
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_tie_broken_by_pattern_length() {
        let candidates = vec![
            candidate("long", "long$", &[0], true),
            candidate("ng", "ng$", &[0], true),
        ];
        let selected = select_cover(&candidates, 1).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key, "ng");
    }

    #[test]
    fn test_tie_broken_by_key() {
        let candidates = vec![
            candidate("zz", "zz$", &[0], true),
            candidate("aa", "aa$", &[0], true),
        ];
        let selected = select_cover(&candidates, 1).unwrap();
        assert_eq!(selected[0].key, "aa");
    }

    #[test]
    fn test_result_is_a_cover() {
        let candidates = vec![
            candidate("a", "a$", &[0, 2], true),
            candidate("b", "b$", &[1], true),
            candidate("c", "c$", &[3], true),
        ];
        let selected = select_cover(&candidates, 4).unwrap();
        let covered: FxHashSet<usize> = selected
            .iter()
            .flat_map(|c| c.covers.iter().copied())
            .collect();
        assert_eq!(covered.len(), 4);
    }

    #[test]
    fn test_uncoverable_surfaced() {
        let candidates = vec![candidate("a", "a$", &[0], true)];
        let err = select_cover(&candidates, 2).unwrap_err();
        assert_eq!(err, GenerateError::Uncoverable);
    }

    #[test]
    fn test_candidate_order_does_not_matter() {
        let mut candidates = vec![
            candidate("a", "a$", &[0], true),
            candidate("b", "b$", &[0], true),
            candidate("cd", "cd$", &[1], true),
        ];
        let forward = select_cover(&candidates, 2).unwrap();
        candidates.reverse();
        let backward = select_cover(&candidates, 2).unwrap();
        let forward_keys: Vec<&str> = forward.iter().map(|c| c.key.as_str()).collect();
        let backward_keys: Vec<&str> = backward.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(forward_keys, backward_keys);
    }
}
