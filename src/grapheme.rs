//! Grapheme keys and anchor identifiers.
//!
//! A grapheme such as `Ng`, `ㅂ` or `اً` is turned into a key of the form
//! `{language}-{sanitized}` so the same visible unit can be linked and
//! deduplicated across a corpus. Sanitizing is, in order:
//!
//! 1. trim surrounding whitespace (including U+FEFF)
//! 2. canonical decomposition (NFD)
//! 3. strip combining diacritical marks (U+0300..U+036F)
//! 4. drop everything that is not a letter, a number, whitespace or a hyphen
//! 5. whitespace runs become a single hyphen
//! 6. hyphen runs become a single hyphen
//! 7. lower-case
//!
//! A grapheme that sanitizes to nothing gets the key `{language}-unknown`.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Sanitized segment used when nothing survives sanitizing.
pub const FALLBACK: &str = "unknown";

/// Prefix of every anchor identifier.
pub const ANCHOR_PREFIX: &str = "grapheme";

// Whitespace here is Unicode White_Space plus U+FEFF (zero width no-break space).
const BYTE_ORDER_MARK: char = '\u{FEFF}';

lazy_static! {
    static ref COMBINING_MARKS: Regex = Regex::new(r"[\x{0300}-\x{036F}]").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^\p{L}\p{N}\s\x{FEFF}-]").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"[\s\x{FEFF}]+").unwrap();
    static ref HYPHEN_RUNS: Regex = Regex::new(r"-+").unwrap();
}

/// The sanitized form of a grapheme; empty when nothing survives.
pub fn sanitize(grapheme: &str) -> String {
    let trimmed = grapheme.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    let decomposed: String = trimmed.nfd().collect();
    let stripped = COMBINING_MARKS.replace_all(&decomposed, "");
    let filtered = DISALLOWED.replace_all(&stripped, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&filtered, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.to_lowercase()
}

/// `{language_id}-{sanitized}`, or `{language_id}-unknown` for degenerate graphemes.
pub fn grapheme_key(language_id: &str, grapheme: &str) -> String {
    let sanitized = sanitize(grapheme);
    if sanitized.is_empty() {
        format!("{language_id}-{FALLBACK}")
    } else {
        format!("{language_id}-{sanitized}")
    }
}

/// `grapheme-{key}`.
pub fn grapheme_anchor_id(language_id: &str, grapheme: &str) -> String {
    format!("{ANCHOR_PREFIX}-{}", grapheme_key(language_id, grapheme))
}

/// A grapheme together with the identifiers derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphemeKey {
    language: String,
    grapheme: String,
    key: String,
}

impl GraphemeKey {
    pub fn new(language_id: &str, grapheme: &str) -> Self {
        Self {
            language: language_id.to_string(),
            grapheme: grapheme.to_string(),
            key: grapheme_key(language_id, grapheme),
        }
    }
    pub fn language(&self) -> &str {
        &self.language
    }
    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    /// The key with the language prefix removed.
    pub fn sanitized(&self) -> &str {
        &self.key[self.language.len() + 1..]
    }
    pub fn is_fallback(&self) -> bool {
        sanitize(&self.grapheme).is_empty()
    }
    pub fn anchor_id(&self) -> String {
        format!("{ANCHOR_PREFIX}-{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_apply_in_order() {
        // decomposed é loses its accent before the letter filter runs
        assert_eq!(sanitize("  Café  au  lait "), "cafe-au-lait");
        assert_eq!(sanitize("a - - b"), "a-b");
        assert_eq!(sanitize("ng!?"), "ng");
        assert_eq!(sanitize("Ŋ"), "ŋ");
    }

    #[test]
    fn hangul_syllables_decompose_into_jamo() {
        // NFD splits a precomposed syllable into conjoining jamo, which are letters
        assert_eq!(sanitize("한"), "\u{1112}\u{1161}\u{11AB}");
    }

    #[test]
    fn fallback_is_marked() {
        let key = GraphemeKey::new("ind", "!!!");
        assert_eq!(key.key(), "ind-unknown");
        assert!(key.is_fallback());
        let literal = GraphemeKey::new("ind", "Unknown");
        assert_eq!(literal.key(), "ind-unknown");
        assert!(!literal.is_fallback());
    }

    #[test]
    fn sanitized_segment_strips_language_prefix() {
        let key = GraphemeKey::new("kor", "ㅂ");
        assert_eq!(key.sanitized(), "ㅂ");
        assert_eq!(key.anchor_id(), "grapheme-kor-ㅂ");
    }
}
