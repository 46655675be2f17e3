//! Length-bounded packing — stage 5 of the pipeline.
//!
//! Distributes pattern fragments across one or more output entries joined by
//! `|`, each within the configured character budget. First-fit after sorting
//! by (length, value): not optimal bin-packing, but fragment counts are
//! small and the result is deterministic.

use crate::error::{GenerateError, GenerateResult};
use crate::escape::char_len;

/// Pack self-contained fragments (already anchored) into bounded entries.
///
/// Fails with [`GenerateError::OversizeFragment`] if any single fragment
/// exceeds `max_length` on its own.
pub fn pack_fragments<S: AsRef<str>>(
    fragments: &[S],
    max_length: usize,
) -> GenerateResult<Vec<String>> {
    let mut ordered: Vec<&str> = fragments.iter().map(AsRef::as_ref).collect();
    ordered.sort_by_key(|value| (char_len(value), *value));

    let mut entries: Vec<String> = Vec::new();
    let mut current = String::new();

    for fragment in ordered {
        if char_len(fragment) > max_length {
            return Err(GenerateError::OversizeFragment {
                fragment: fragment.to_string(),
            });
        }

        if current.is_empty() {
            current = fragment.to_string();
            continue;
        }

        if char_len(&current) + 1 + char_len(fragment) <= max_length {
            current.push('|');
            current.push_str(fragment);
        } else {
            entries.push(std::mem::take(&mut current));
            current = fragment.to_string();
        }
    }

    if !current.is_empty() {
        entries.push(current);
    }

    Ok(entries)
}

/// Pack escaped bare names into fully-anchored exact entries.
///
/// A single name is emitted as `^name$`; two or more are wrapped as
/// `^(?:a|b|…)$`. The budget check always uses the projected anchored
/// length, not the bare alternation, so anchors added at flush time can
/// never push an entry over the limit.
pub fn pack_exact_names<S: AsRef<str>>(
    names: &[S],
    max_length: usize,
) -> GenerateResult<Vec<String>> {
    let mut ordered: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    ordered.sort_by_key(|value| (char_len(value), *value));

    let mut entries: Vec<String> = Vec::new();
    let mut current = String::new();

    for name in ordered {
        let single = format!("^{name}$");
        if char_len(&single) > max_length {
            return Err(GenerateError::OversizeFragment { fragment: single });
        }

        if current.is_empty() {
            current = name.to_string();
            continue;
        }

        let joined = format!("{current}|{name}");
        let grouped = format!("^(?:{joined})$");
        if char_len(&grouped) <= max_length {
            current = joined;
        } else {
            entries.push(anchor_exact(&current));
            current = name.to_string();
        }
    }

    if !current.is_empty() {
        entries.push(anchor_exact(&current));
    }

    Ok(entries)
}

/// Anchor an accumulated exact alternation at emission time.
fn anchor_exact(body: &str) -> String {
    if body.contains('|') {
        format!("^(?:{body})$")
    } else {
        format!("^{body}$")
    }
}
