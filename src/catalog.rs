//! A corpus of language descriptions keyed by language id.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::classify::Phoneme;
use crate::error::{InventoryIssue, PhonoscopeError, Result};
use crate::grapheme::GraphemeKey;
use crate::inventory::{IndexHasher, Language, LanguageRecord};
use crate::reference::{Conformance, ReferenceTable};

// Indonesian, Korean and Arabic
const BUNDLED: &str = include_str!("../data/languages.json");

/// A phoneme whose transcription is not one of the reference symbols at its coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonconformance<'a> {
    pub language: &'a str,
    pub phoneme: &'a Phoneme,
    pub conformance: Conformance,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: Vec<Language>,
    by_id: HashMap<String, usize, IndexHasher>,
}

impl Catalog {
    pub fn new<I>(languages: I) -> Result<Self>
    where
        I: IntoIterator<Item = Language>,
    {
        let mut catalog = Catalog::default();
        for language in languages {
            if catalog.by_id.contains_key(language.id()) {
                warn!(language = %language.id(), "duplicate language id");
                return Err(PhonoscopeError::Inventory {
                    language: language.id().to_string(),
                    issue: InventoryIssue::DuplicateLanguage,
                });
            }
            catalog.by_id.insert(language.id().to_string(), catalog.languages.len());
            catalog.languages.push(language);
        }
        info!(languages = catalog.languages.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Validates every record; the first failing record aborts the load.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = LanguageRecord>,
    {
        let languages = records
            .into_iter()
            .map(Language::try_from)
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(languages)
    }

    /// Reads a JSON array of language records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<LanguageRecord> = serde_json::from_str(json)?;
        Catalog::from_records(records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading catalog");
        let json = fs::read_to_string(path)?;
        Catalog::from_json(&json)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Catalog::from_json(BUNDLED)
    }

    pub fn language(&self, id: &str) -> Option<&Language> {
        self.by_id.get(id).map(|&i| &self.languages[i])
    }
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(Language::id)
    }
    pub fn len(&self) -> usize {
        self.languages.len()
    }
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Key of `grapheme` in language `id`, or `None` when the language is not catalogued.
    pub fn grapheme_key(&self, id: &str, grapheme: &str) -> Option<GraphemeKey> {
        self.language(id).map(|language| language.grapheme_key(grapheme))
    }

    /// Phonemes whose transcription is not listed at their coordinate in `table`.
    pub fn nonconformances<'a>(&'a self, table: &ReferenceTable) -> Vec<Nonconformance<'a>> {
        let mut found = Vec::new();
        for language in &self.languages {
            for phoneme in language.phonemes() {
                let conformance = table.conformance(phoneme);
                if conformance != Conformance::Canonical {
                    debug!(language = %language.id(), ipa = %phoneme.ipa(), ?conformance, "phoneme off the reference chart");
                    found.push(Nonconformance { language: language.id(), phoneme, conformance });
                }
            }
        }
        found
    }
}
