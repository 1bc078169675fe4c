//! Phonoscope – phoneme inventories and stable grapheme keys for language descriptions.
//!
//! The crate models phonological inventories for multiple languages and derives
//! collision resistant identifiers from orthographic graphemes, so that a phoneme
//! or grapheme can be linked, deduplicated and anchored consistently across a
//! corpus of language descriptions.
//!
//! ## Modules
//! * [`classify`] – Dimensions of the consonant grid (place × manner, optional voicing)
//!   and the vowel grid (height × backness × rounding), plus the [`classify::Phoneme`]
//!   sum type and the discriminator that classifies flat records.
//! * [`reference`] – The canonical IPA grids ([`reference::ReferenceTable`]),
//!   distinguishing a cell that is not defined from one that is defined but vacant.
//! * [`inventory`] – A validated [`inventory::Language`]: phonemes, contextual rules and
//!   realization lookups.
//! * [`catalog`] – A corpus of languages keyed by id, loaded from JSON. A small catalog
//!   (Indonesian, Korean, Arabic) is bundled.
//! * [`grapheme`] – The grapheme key normalizer and anchor identifiers.
//! * [`chart`] – The reference grid with a language's phonemes overlaid, ready for a
//!   presentation layer.
//! * [`settings`] – Configuration for the command line front end.
//!
//! ## Grapheme keys
//! Keys are `{language}-{sanitized}` where sanitizing decomposes, strips diacritics,
//! drops punctuation, hyphenates whitespace and lower-cases. Anything that sanitizes
//! to nothing becomes `{language}-unknown`, so key generation is total.
//!
//! ## Quick Start
//! ```
//! use phonoscope::catalog::Catalog;
//! use phonoscope::grapheme::{grapheme_anchor_id, grapheme_key};
//!
//! assert_eq!(grapheme_key("ind", "Ng"), "ind-ng");
//! assert_eq!(grapheme_anchor_id("ind", "Ng"), "grapheme-ind-ng");
//!
//! let catalog = Catalog::builtin().unwrap();
//! let korean = catalog.language("kor").unwrap();
//! assert_eq!(korean.realize_in("p", "syllable-final"), Some("p̚"));
//! assert_eq!(korean.realize_in("p", "intervocalic"), Some("p"));
//! ```
//!
//! ## Validation
//! Records are validated when a [`inventory::Language`] is built: every phoneme must be
//! exactly one of the two shapes, transcriptions are unique within a language, and every
//! rule refers to a phoneme of the inventory with distinct environment labels. Key
//! generation and reference lookups never fail.

pub mod catalog;
pub mod chart;
pub mod classify;
pub mod error;
pub mod grapheme;
pub mod inventory;
pub mod reference;
pub mod settings;

pub use error::{PhonoscopeError, Result};
