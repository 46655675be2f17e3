//! Regex-literal escaping and character-length accounting.
//!
//! Every literal embedded in an emitted pattern goes through [`escape`], so
//! metacharacters in item names (`Orb (x2)`, `A+B`) always match themselves.
//! Length budgets are counted in characters, not bytes, because the consumer
//! search box counts what the user sees.

/// Escape a literal string for embedding in a pattern.
///
/// Thin wrapper over [`regex::escape`] so call sites don't depend on the
/// regex crate directly.
pub fn escape(literal: &str) -> String {
    regex::escape(literal)
}

/// Escape a single character (used when rendering compacted suffix trees
/// one trailing character at a time).
pub fn escape_char(ch: char) -> String {
    regex::escape(ch.encode_utf8(&mut [0u8; 4]))
}

/// Pattern length in characters.
pub fn char_len(pattern: &str) -> usize {
    pattern.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("Chaos Orb"), "Chaos Orb");
    }

    #[test]
    fn test_metacharacters_escaped() {
        let escaped = escape("Orb (x2)+$");
        assert_eq!(escaped, r"Orb \(x2\)\+\$");
    }

    #[test]
    fn test_escape_char_meta() {
        assert_eq!(escape_char('$'), r"\$");
        assert_eq!(escape_char('a'), "a");
    }

    #[test]
    fn test_char_len_multibyte() {
        assert_eq!(char_len("Maelström$"), 10);
        assert!("Maelström$".len() > 10);
    }
}
