//! Per-language phoneme inventories and their contextual rules.
//!
//! A [`LanguageRecord`] is the plain shape a catalog supplies. Turning it
//! into a [`Language`] classifies every phoneme and checks the inventory for
//! consistency; a `Language` is never mutated afterwards.

use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use seahash::SeaHasher;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::{ConsonantPhoneme, Phoneme, PhonemeRecord, VowelPhoneme};
use crate::error::{InventoryIssue, PhonoscopeError, Result};
use crate::grapheme::GraphemeKey;

pub type IndexHasher = BuildHasherDefault<SeaHasher>;

// ------------- Rules -------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Allophone,
    Distribution,
    Phonotactic,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuleType::Allophone => write!(f, "allophone"),
            RuleType::Distribution => write!(f, "distribution"),
            RuleType::Phonotactic => write!(f, "phonotactic"),
        }
    }
}

/// A surface form and the (free text) environment it occurs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realization {
    pub ipa: String,
    pub environment: String,
}

impl Realization {
    pub fn new(ipa: impl Into<String>, environment: impl Into<String>) -> Self {
        Self { ipa: ipa.into(), environment: environment.into() }
    }
}

/// A flat environment → realization lookup for one underlying phoneme.
/// The order of realizations is documentation order, not priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RuleType,
    pub phoneme: String,
    pub realizations: Vec<Realization>,
}

impl LanguageRule {
    pub fn new(name: impl Into<String>, kind: RuleType, phoneme: impl Into<String>) -> Self {
        Self { name: name.into(), kind, phoneme: phoneme.into(), realizations: Vec::new() }
    }
    pub fn realization(mut self, ipa: impl Into<String>, environment: impl Into<String>) -> Self {
        self.realizations.push(Realization::new(ipa, environment));
        self
    }
    /// The first realization whose environment satisfies `matches`.
    pub fn realization_where<F>(&self, matches: F) -> Option<&Realization>
    where
        F: Fn(&str) -> bool,
    {
        self.realizations.iter().find(|r| matches(&r.environment))
    }
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.realizations.iter().map(|r| r.environment.as_str())
    }
}

// ------------- LanguageRecord -------------

/// The unit an external catalog supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub id: String,
    pub name: String,
    pub variety: String,
    pub script: String,
    pub phonemes: Vec<PhonemeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<LanguageRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LanguageRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        variety: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variety: variety.into(),
            script: script.into(),
            phonemes: Vec::new(),
            rules: Vec::new(),
            notes: None,
        }
    }
    pub fn phoneme(mut self, phoneme: impl Into<PhonemeRecord>) -> Self {
        self.phonemes.push(phoneme.into());
        self
    }
    pub fn rule(mut self, rule: LanguageRule) -> Self {
        self.rules.push(rule);
        self
    }
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
    pub fn build(self) -> Result<Language> {
        Language::try_from(self)
    }
}

// ------------- Language -------------

/// One entry of a language's grapheme index.
#[derive(Debug, Clone)]
pub struct GraphemeEntry<'a> {
    pub key: GraphemeKey,
    pub phoneme: &'a Phoneme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LanguageRecord", into = "LanguageRecord")]
pub struct Language {
    id: String,
    name: String,
    variety: String,
    script: String,
    phonemes: Vec<Phoneme>,
    rules: Vec<LanguageRule>,
    notes: Option<String>,
    by_ipa: HashMap<String, usize, IndexHasher>,
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.variety == other.variety
            && self.script == other.script
            && self.phonemes == other.phonemes
            && self.rules == other.rules
            && self.notes == other.notes
    }
}

impl Eq for Language {}

impl TryFrom<LanguageRecord> for Language {
    type Error = PhonoscopeError;

    fn try_from(record: LanguageRecord) -> Result<Self> {
        let LanguageRecord { id, name, variety, script, phonemes, rules, notes } = record;
        let rejected = |issue: InventoryIssue| {
            warn!(language = %id, %issue, "rejected language record");
            PhonoscopeError::Inventory { language: id.clone(), issue }
        };

        let mut classified = Vec::with_capacity(phonemes.len());
        for phoneme in phonemes {
            match Phoneme::try_from(phoneme) {
                Ok(p) => classified.push(p),
                Err(e) => {
                    warn!(language = %id, error = %e, "rejected language record");
                    return Err(e);
                }
            }
        }

        let mut by_ipa = HashMap::<String, usize, IndexHasher>::default();
        for (i, phoneme) in classified.iter().enumerate() {
            if by_ipa.insert(phoneme.ipa().to_string(), i).is_some() {
                return Err(rejected(InventoryIssue::DuplicatePhoneme { ipa: phoneme.ipa().to_string() }));
            }
        }

        let mut rule_names = HashSet::new();
        for rule in &rules {
            if !rule_names.insert(rule.name.as_str()) {
                return Err(rejected(InventoryIssue::DuplicateRuleName { rule: rule.name.clone() }));
            }
            if rule.realizations.is_empty() {
                return Err(rejected(InventoryIssue::EmptyRealizations { rule: rule.name.clone() }));
            }
            if !by_ipa.contains_key(&rule.phoneme) {
                return Err(rejected(InventoryIssue::UnknownRulePhoneme {
                    rule: rule.name.clone(),
                    phoneme: rule.phoneme.clone(),
                }));
            }
            let mut environments = HashSet::new();
            for environment in rule.environments() {
                if !environments.insert(environment) {
                    return Err(rejected(InventoryIssue::DuplicateEnvironment {
                        rule: rule.name.clone(),
                        environment: environment.to_string(),
                    }));
                }
            }
        }

        debug!(language = %id, phonemes = classified.len(), rules = rules.len(), "accepted language");
        Ok(Language { id, name, variety, script, phonemes: classified, rules, notes, by_ipa })
    }
}

impl From<Language> for LanguageRecord {
    fn from(language: Language) -> Self {
        LanguageRecord {
            id: language.id,
            name: language.name,
            variety: language.variety,
            script: language.script,
            phonemes: language.phonemes.into_iter().map(PhonemeRecord::from).collect(),
            rules: language.rules,
            notes: language.notes,
        }
    }
}

impl Language {
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn variety(&self) -> &str {
        &self.variety
    }
    pub fn script(&self) -> &str {
        &self.script
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }
    pub fn rules(&self) -> &[LanguageRule] {
        &self.rules
    }

    pub fn phoneme(&self, ipa: &str) -> Option<&Phoneme> {
        self.by_ipa.get(ipa).map(|&i| &self.phonemes[i])
    }
    pub fn consonants(&self) -> impl Iterator<Item = &ConsonantPhoneme> {
        self.phonemes.iter().filter_map(Phoneme::as_consonant)
    }
    pub fn vowels(&self) -> impl Iterator<Item = &VowelPhoneme> {
        self.phonemes.iter().filter_map(Phoneme::as_vowel)
    }
    pub fn rule(&self, name: &str) -> Option<&LanguageRule> {
        self.rules.iter().find(|r| r.name == name)
    }
    pub fn rules_for<'a>(&'a self, ipa: &'a str) -> impl Iterator<Item = &'a LanguageRule> + 'a {
        self.rules.iter().filter(move |r| r.phoneme == ipa)
    }

    /// Surface realization of `base` in an environment recognised by `matches`.
    ///
    /// Rules for `base` are scanned in order and the first realization whose
    /// environment satisfies the predicate wins; otherwise the phoneme realizes
    /// as itself. `None` only when `base` is not in the inventory.
    pub fn realize<F>(&self, base: &str, matches: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        let phoneme = self.phoneme(base)?;
        let realized = self
            .rules
            .iter()
            .filter(|rule| rule.phoneme == base)
            .find_map(|rule| rule.realization_where(&matches))
            .map(|r| r.ipa.as_str())
            .unwrap_or_else(|| phoneme.ipa());
        Some(realized)
    }

    /// [`Language::realize`] with plain string equality on the environment label.
    pub fn realize_in(&self, base: &str, environment: &str) -> Option<&str> {
        self.realize(base, |candidate| candidate == environment)
    }

    /// Every surface form of `base`: itself, then each rule realization, without repeats.
    pub fn realizations_of(&self, base: &str) -> Vec<&str> {
        let Some(phoneme) = self.phoneme(base) else {
            return Vec::new();
        };
        let mut forms = vec![phoneme.ipa()];
        for rule in self.rules.iter().filter(|rule| rule.phoneme == base) {
            for realization in &rule.realizations {
                if !forms.contains(&realization.ipa.as_str()) {
                    forms.push(&realization.ipa);
                }
            }
        }
        forms
    }

    pub fn grapheme_key(&self, grapheme: &str) -> GraphemeKey {
        GraphemeKey::new(&self.id, grapheme)
    }

    /// Every (grapheme, phoneme) pairing in inventory order.
    pub fn graphemes(&self) -> Vec<GraphemeEntry<'_>> {
        self.phonemes
            .iter()
            .flat_map(|phoneme| {
                phoneme
                    .graphemes()
                    .iter()
                    .map(move |g| GraphemeEntry { key: GraphemeKey::new(&self.id, g), phoneme })
            })
            .collect()
    }

    /// Phonemes spelled by a grapheme that normalizes to the same key as `grapheme`.
    pub fn phonemes_for_grapheme(&self, grapheme: &str) -> Vec<&Phoneme> {
        let wanted = self.grapheme_key(grapheme);
        self.phonemes
            .iter()
            .filter(|p| p.graphemes().iter().any(|g| GraphemeKey::new(&self.id, g).key() == wanted.key()))
            .collect()
    }
}
