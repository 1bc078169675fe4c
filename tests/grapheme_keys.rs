use phonoscope::grapheme::{grapheme_anchor_id, grapheme_key, sanitize, GraphemeKey};

#[test]
fn latin_digraph_is_lower_cased() {
    assert_eq!(grapheme_key("ind", "Ng"), "ind-ng");
    assert_eq!(grapheme_key("ind", "NG"), "ind-ng");
    assert_eq!(grapheme_key("ind", " ng "), "ind-ng");
}

#[test]
fn hangul_letter_survives_unchanged() {
    // compatibility jamo do not decompose and are letters
    assert_eq!(grapheme_key("kor", "ㅂ"), "kor-ㅂ");
    assert_eq!(grapheme_key("kor", "ㅡ"), "kor-ㅡ");
}

#[test]
fn arabic_vowel_mark_is_dropped() {
    // alef followed by fathatan; the mark is not a letter so the filter removes it
    assert_eq!(grapheme_key("arb", "اً"), "arb-ا");
    assert_eq!(grapheme_key("arb", "ِ"), "arb-unknown");
}

#[test]
fn anchor_id_wraps_the_key() {
    assert_eq!(grapheme_anchor_id("ind", "Ng"), "grapheme-ind-ng");
    assert_eq!(grapheme_anchor_id("ind", "?"), "grapheme-ind-unknown");
    assert_eq!(GraphemeKey::new("ind", "Ng").anchor_id(), grapheme_anchor_id("ind", "Ng"));
}

#[test]
fn degenerate_graphemes_fall_back() {
    for grapheme in ["", "   ", "!!!", "…", "\u{0301}", "()"] {
        assert_eq!(grapheme_key("ind", grapheme), "ind-unknown", "grapheme {grapheme:?}");
    }
}

#[test]
fn inner_whitespace_between_punctuation_leaves_a_hyphen() {
    // the space survives filtering and becomes a separator, so nothing falls back
    assert_eq!(sanitize("! !"), "-");
    assert_eq!(grapheme_key("ind", "! !"), "ind--");
    assert!(!GraphemeKey::new("ind", "! !").is_fallback());
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert_eq!(sanitize("a\u{FEFF}b"), "a-b");
    assert_eq!(sanitize("\u{FEFF}ng\u{FEFF}"), "ng");
    assert_eq!(grapheme_key("ind", "\u{FEFF}"), "ind-unknown");
}

#[test]
fn diacritics_collapse_onto_base_letters() {
    assert_eq!(grapheme_key("ind", "É"), "ind-e");
    assert_eq!(grapheme_key("ind", "ñ"), grapheme_key("ind", "n"));
    // tie bar and unreleased mark sit in the combining block
    assert_eq!(sanitize("t͡ʃ"), "tʃ");
    assert_eq!(sanitize("p̚"), "p");
    assert_eq!(sanitize("ŋ̈"), "ŋ");
}

#[test]
fn separators_are_normalized() {
    assert_eq!(sanitize("New  York"), "new-york");
    assert_eq!(sanitize("a\t-\n b"), "a-b");
    assert_eq!(sanitize("--a--"), "-a-");
    assert_eq!(sanitize("a_b"), "ab");
    assert_eq!(sanitize("x2"), "x2");
}

#[test]
fn same_spelling_in_two_languages_does_not_collide() {
    assert_ne!(grapheme_key("ind", "a"), grapheme_key("kor", "a"));
    assert_eq!(GraphemeKey::new("ind", "a").sanitized(), GraphemeKey::new("kor", "a").sanitized());
}
