//! Suffix enumeration and the balanced-mode eligibility filter.
//!
//! Suffixes are taken at character boundaries, never mid-codepoint, so
//! multibyte names are safe. The balanced filter exists for readability:
//! a three-letter word tail is a terrible search pattern even when it
//! happens not to collide with anything.

use rustc_hash::FxHashSet;

/// All suffixes of `text`, longest first, including `text` itself.
pub fn suffixes(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices().map(move |(pos, _)| &text[pos..])
}

/// The set of every suffix of every name.
///
/// Borrowed from the input names; the caller keeps the backing vector alive
/// for the duration of the run.
pub fn suffix_set<'a, I>(names: I) -> FxHashSet<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = FxHashSet::default();
    for name in names {
        set.extend(suffixes(name));
    }
    set
}

/// Balanced-mode eligibility for a raw suffix.
///
/// Rejected: empty suffixes, suffixes that start at a word break (leading
/// space), multi-word suffixes shorter than `min_multi_word_len`, and
/// single-word suffixes shorter than `min_single_word_len`. Lengths are in
/// characters.
pub fn is_balanced_suffix(
    raw_suffix: &str,
    min_single_word_len: usize,
    min_multi_word_len: usize,
) -> bool {
    if raw_suffix.is_empty() || raw_suffix.starts_with(' ') {
        return false;
    }
    let len = raw_suffix.chars().count();
    if raw_suffix.contains(' ') {
        len >= min_multi_word_len
    } else {
        len >= min_single_word_len
    }
}
