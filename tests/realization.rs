use phonoscope::catalog::Catalog;
use phonoscope::classify::{ConsonantPhoneme, Manner, Place, Voicing};
use phonoscope::inventory::{Language, LanguageRecord, LanguageRule, RuleType};

fn builtin(id: &str) -> Language {
    Catalog::builtin().unwrap().language(id).unwrap().clone()
}

#[test]
fn korean_plosive_realizations() {
    let korean = builtin("kor");
    assert_eq!(korean.realize_in("p", "word-initial stressed"), Some("pʰ"));
    assert_eq!(korean.realize_in("p", "syllable-final"), Some("p̚"));
    // no realization matches, the phoneme stands for itself
    assert_eq!(korean.realize_in("p", "intervocalic"), Some("p"));
    assert_eq!(korean.realize_in("p", ""), Some("p"));
}

#[test]
fn indonesian_e_ambiguity() {
    let indonesian = builtin("ind");
    assert_eq!(indonesian.realize_in("e", "stressed syllables"), Some("e"));
    assert_eq!(indonesian.realize_in("e", "unstressed syllables"), Some("ə"));
    assert_eq!(indonesian.realize_in("e", "word-final"), Some("e"));
}

#[test]
fn phoneme_without_rules_realizes_as_itself() {
    let arabic = builtin("arb");
    assert!(arabic.rules().is_empty());
    assert_eq!(arabic.realize_in("q", "word-initial"), Some("q"));
    assert_eq!(builtin("kor").realize_in("t", "syllable-final"), Some("t"));
}

#[test]
fn unknown_base_has_no_realization() {
    let korean = builtin("kor");
    assert_eq!(korean.realize_in("θ", "syllable-final"), None);
    assert_eq!(korean.realize("θ", |_| true), None);
    assert!(korean.realizations_of("θ").is_empty());
}

#[test]
fn environment_predicate_decides() {
    let korean = builtin("kor");
    assert_eq!(korean.realize("p", |env| env.starts_with("word-initial")), Some("pʰ"));
    assert_eq!(korean.realize("p", |env| env.contains("final")), Some("p̚"));
    // documentation order breaks ties
    assert_eq!(korean.realize("p", |_| true), Some("pʰ"));
    assert_eq!(korean.realize("p", |_| false), Some("p"));
}

#[test]
fn every_surface_form_is_listed_once() {
    assert_eq!(builtin("kor").realizations_of("p"), ["p", "pʰ", "p̚"]);
    // the stressed realization repeats the phoneme itself
    assert_eq!(builtin("ind").realizations_of("e"), ["e", "ə"]);
    assert_eq!(builtin("arb").realizations_of("ʕ"), ["ʕ"]);
}

#[test]
fn rules_are_scanned_in_order() {
    let language = LanguageRecord::new("tst", "Testish", "Standard", "Latin")
        .phoneme(ConsonantPhoneme::new("t", Place::Alveolar, Manner::Plosive).with_voicing(Voicing::Voiceless))
        .rule(LanguageRule::new("flap", RuleType::Allophone, "t").realization("ɾ", "intervocalic"))
        .rule(
            LanguageRule::new("glottal", RuleType::Allophone, "t")
                .realization("ʔ", "intervocalic")
                .realization("t̚", "word-final"),
        )
        .build()
        .unwrap();
    assert_eq!(language.rules_for("t").count(), 2);
    assert_eq!(language.realize_in("t", "intervocalic"), Some("ɾ"));
    assert_eq!(language.realize_in("t", "word-final"), Some("t̚"));
    assert_eq!(language.realizations_of("t"), ["t", "ɾ", "ʔ", "t̚"]);
}
