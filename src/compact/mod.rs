//! Suffix compaction — stage 4 of the pipeline.
//!
//! Merges several suffix fragments into one alternation by grouping on the
//! trailing character and recursing on the remaining prefixes — a
//! reversed-string trie rendered directly as nested regex groups. The merge
//! is advisory: the caller keeps the original fragments unless the compacted
//! form is strictly shorter and fits the entry budget.

use std::collections::BTreeMap;

use crate::escape::escape_char;

/// Try to merge `raw_suffixes` into a single `(…)$` alternation.
///
/// Returns `None` when compaction would be unsound or pointless: fewer than
/// two distinct keys, an empty key, or one key being a proper suffix of
/// another (merging those would change which strings match).
pub fn compact_suffixes<S: AsRef<str>>(raw_suffixes: &[S]) -> Option<String> {
    let mut unique: Vec<&str> = raw_suffixes.iter().map(AsRef::as_ref).collect();
    unique.sort_unstable();
    unique.dedup();

    if unique.len() <= 1 {
        return None;
    }
    if unique.iter().any(|value| value.is_empty()) {
        return None;
    }
    if has_suffix_relations(&unique) {
        return None;
    }

    Some(format!("({})$", build_suffix_regex(&unique)))
}

/// Whether any string in `values` is a proper suffix of another.
fn has_suffix_relations(values: &[&str]) -> bool {
    let mut ordered: Vec<&str> = values.to_vec();
    ordered.sort_by_key(|value| value.len());
    for (index, short) in ordered.iter().enumerate() {
        if ordered[index + 1..].iter().any(|long| long.ends_with(short)) {
            return true;
        }
    }
    false
}

/// Render a set of strings as a trailing-character alternation tree.
///
/// Groups by the final character (in sorted char order), recurses on the
/// chopped prefixes, and collapses singleton groups without parentheses.
fn build_suffix_regex(values: &[&str]) -> String {
    // trailing char -> prefixes that precede it
    let mut groups: BTreeMap<char, Vec<&str>> = BTreeMap::new();
    for value in values {
        let last = value
            .chars()
            .next_back()
            .expect("empty strings are rejected before compaction");
        let prefix = &value[..value.len() - last.len_utf8()];
        groups.entry(last).or_default().push(prefix);
    }

    let mut parts: Vec<String> = Vec::with_capacity(groups.len());
    for (ch, mut prefixes) in groups {
        prefixes.sort_unstable();
        prefixes.dedup();
        let subpattern = if prefixes.iter().all(|prefix| prefix.is_empty()) {
            String::new()
        } else {
            build_suffix_regex(&prefixes)
        };
        parts.push(format!("{}{}", subpattern, escape_char(ch)));
    }

    if parts.len() == 1 {
        parts.swap_remove(0)
    } else {
        format!("({})", parts.join("|"))
    }
}
