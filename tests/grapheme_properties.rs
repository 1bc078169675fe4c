//! Property-based tests for the grapheme key normalizer.
//!
//! 1. **Determinism**: the same input always yields the same key
//! 2. **Idempotence**: sanitizing a sanitized segment changes nothing
//! 3. **Namespacing**: different language ids never share a key
//! 4. **Totality**: degenerate input maps to the `unknown` fallback
//! 5. **Character set**: printable ASCII input sanitizes into `[a-z0-9-]`

use phonoscope::grapheme::{grapheme_anchor_id, grapheme_key, sanitize, GraphemeKey};
use proptest::prelude::*;

// Latin with and without precomposed accents, Hangul, Arabic with marks,
// digits, whitespace, hyphens and punctuation.
const ALPHABET: &[char] = &[
    'a', 'B', 'n', 'G', 'z', 'Y', 'é', 'È', 'ñ', 'Å', 'Ø', 'ç', 'İ', 'ß', 'ŋ', 'ʃ', '0', '7', ' ', '\t', '-', '-', '!',
    '.', ',', '\'', '(', '_', 'ㅂ', 'ㅏ', '한', 'ا', 'ب', '\u{064B}', '\u{0301}', '\u{0361}',
];

// Nothing here is a letter or a number once diacritics are gone. Whitespace is
// left out: an inner space survives as a hyphen.
const DEGENERATE: &[char] = &['!', '?', '.', ';', '\u{0300}', '\u{0301}', '\u{064B}'];

fn arb_grapheme() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..24).prop_map(|chars| chars.into_iter().collect())
}

fn arb_degenerate() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(DEGENERATE), 0..12).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn key_is_deterministic(grapheme in any::<String>()) {
        prop_assert_eq!(grapheme_key("ind", &grapheme), grapheme_key("ind", &grapheme));
        prop_assert_eq!(grapheme_anchor_id("ind", &grapheme), grapheme_anchor_id("ind", &grapheme));
    }

    #[test]
    fn sanitizing_is_idempotent(grapheme in arb_grapheme()) {
        let once = sanitize(&grapheme);
        prop_assert_eq!(sanitize(&once), once.clone());
        let key = GraphemeKey::new("ind", &grapheme);
        prop_assert_eq!(sanitize(key.sanitized()), key.sanitized());
    }

    #[test]
    fn language_id_namespaces_keys(grapheme in arb_grapheme()) {
        let ind = GraphemeKey::new("ind", &grapheme);
        let kor = GraphemeKey::new("kor", &grapheme);
        prop_assert_eq!(ind.sanitized(), kor.sanitized());
        prop_assert_ne!(ind.key(), kor.key());
        prop_assert!(ind.key().starts_with("ind-"));
    }

    #[test]
    fn degenerate_input_falls_back(grapheme in arb_degenerate()) {
        prop_assert!(grapheme_key("ind", &grapheme).ends_with("-unknown"));
        prop_assert!(GraphemeKey::new("ind", &grapheme).is_fallback());
    }

    #[test]
    fn ascii_input_stays_in_key_alphabet(grapheme in "[ -~]{0,32}") {
        let key = GraphemeKey::new("ind", &grapheme);
        prop_assert!(!key.sanitized().is_empty());
        prop_assert!(
            key.sanitized().chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {:?}",
            key.sanitized()
        );
    }

    #[test]
    fn anchor_is_prefixed_key(grapheme in arb_grapheme()) {
        prop_assert_eq!(grapheme_anchor_id("arb", &grapheme), format!("grapheme-{}", grapheme_key("arb", &grapheme)));
    }
}
