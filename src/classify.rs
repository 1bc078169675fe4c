//! Classification schema for phonemes.
//!
//! Consonants are classified on a place × manner grid (with optional voicing),
//! vowels on a height × backness × rounding grid. A [`Phoneme`] is an explicit
//! sum of the two shapes. Records arriving from outside (JSON catalogs) use the
//! flat [`PhonemeRecord`] shape where the kind is only implied by which fields
//! are present; converting such a record into a [`Phoneme`] is where the
//! discriminator runs, and a record that is neither or both shapes is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PhonoscopeError, Result, ShapeProblem};

// Each dimension gets its chart order, a wire name (used by serde, Display
// and FromStr) and a human readable label.
macro_rules! dimension {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every value in chart order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn wire_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
            /// Position of this value in chart order.
            pub fn ordinal(&self) -> usize {
                *self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.wire_name())
            }
        }

        impl FromStr for $name {
            type Err = PhonoscopeError;
            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err(PhonoscopeError::UnknownName { kind: $kind, name: s.to_string() }),
                }
            }
        }
    };
}

dimension! {
    /// Where in the vocal tract a consonant is produced.
    Place, "place of articulation" {
        Bilabial => ("bilabial", "Bilabial"),
        Labiodental => ("labiodental", "Labiodental"),
        Dental => ("dental", "Dental"),
        Alveolar => ("alveolar", "Alveolar"),
        Postalveolar => ("postalveolar", "Postalveolar"),
        Retroflex => ("retroflex", "Retroflex"),
        Palatal => ("palatal", "Palatal"),
        Velar => ("velar", "Velar"),
        Uvular => ("uvular", "Uvular"),
        Pharyngeal => ("pharyngeal", "Pharyngeal"),
        Glottal => ("glottal", "Glottal"),
        LabialVelar => ("labial-velar", "Labial-velar"),
    }
}

dimension! {
    /// How the airflow is obstructed.
    Manner, "manner of articulation" {
        Plosive => ("plosive", "Plosive"),
        Nasal => ("nasal", "Nasal"),
        Trill => ("trill", "Trill"),
        TapFlap => ("tap_flap", "Tap/Flap"),
        Fricative => ("fricative", "Fricative"),
        LateralFricative => ("lateral_fricative", "Lateral fricative"),
        Approximant => ("approximant", "Approximant"),
        LateralApproximant => ("lateral_approximant", "Lateral approximant"),
        Affricate => ("affricate", "Affricate"),
    }
}

dimension! {
    Voicing, "voicing" {
        Voiceless => ("voiceless", "Voiceless"),
        Voiced => ("voiced", "Voiced"),
        Aspirated => ("aspirated", "Aspirated"),
        Ejective => ("ejective", "Ejective"),
    }
}

dimension! {
    Height, "vowel height" {
        Close => ("close", "Close"),
        NearClose => ("near-close", "Near-close"),
        CloseMid => ("close-mid", "Close-mid"),
        Mid => ("mid", "Mid"),
        OpenMid => ("open-mid", "Open-mid"),
        NearOpen => ("near-open", "Near-open"),
        Open => ("open", "Open"),
    }
}

dimension! {
    Backness, "vowel backness" {
        Front => ("front", "Front"),
        NearFront => ("near-front", "Near-front"),
        Central => ("central", "Central"),
        NearBack => ("near-back", "Near-back"),
        Back => ("back", "Back"),
    }
}

dimension! {
    Rounding, "vowel rounding" {
        Unrounded => ("unrounded", "Unrounded"),
        Rounded => ("rounded", "Rounded"),
    }
}

// ------------- Phoneme -------------

/// Fields shared by consonants and vowels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhonemeBase {
    pub ipa: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphemes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PhonemeBase {
    pub fn new(ipa: impl Into<String>) -> Self {
        Self { ipa: ipa.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsonantPhoneme {
    pub base: PhonemeBase,
    pub place: Place,
    pub manner: Manner,
    pub voicing: Option<Voicing>,
}

impl ConsonantPhoneme {
    pub fn new(ipa: impl Into<String>, place: Place, manner: Manner) -> Self {
        Self { base: PhonemeBase::new(ipa), place, manner, voicing: None }
    }
    pub fn with_voicing(mut self, voicing: Voicing) -> Self {
        self.voicing = Some(voicing);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelPhoneme {
    pub base: PhonemeBase,
    pub height: Height,
    pub backness: Backness,
    pub rounding: Rounding,
}

impl VowelPhoneme {
    pub fn new(ipa: impl Into<String>, height: Height, backness: Backness, rounding: Rounding) -> Self {
        Self { base: PhonemeBase::new(ipa), height, backness, rounding }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonemeKind {
    Consonant,
    Vowel,
}

/// A classified phoneme. The kind is fixed when the value is built, so every
/// consumer can branch on it without re-inspecting fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PhonemeRecord", into = "PhonemeRecord")]
pub enum Phoneme {
    Consonant(ConsonantPhoneme),
    Vowel(VowelPhoneme),
}

impl Phoneme {
    pub fn kind(&self) -> PhonemeKind {
        match self {
            Phoneme::Consonant(_) => PhonemeKind::Consonant,
            Phoneme::Vowel(_) => PhonemeKind::Vowel,
        }
    }
    pub fn is_consonant(&self) -> bool {
        self.kind() == PhonemeKind::Consonant
    }
    pub fn is_vowel(&self) -> bool {
        self.kind() == PhonemeKind::Vowel
    }
    pub fn as_consonant(&self) -> Option<&ConsonantPhoneme> {
        match self {
            Phoneme::Consonant(c) => Some(c),
            Phoneme::Vowel(_) => None,
        }
    }
    pub fn as_vowel(&self) -> Option<&VowelPhoneme> {
        match self {
            Phoneme::Vowel(v) => Some(v),
            Phoneme::Consonant(_) => None,
        }
    }
    pub fn base(&self) -> &PhonemeBase {
        match self {
            Phoneme::Consonant(c) => &c.base,
            Phoneme::Vowel(v) => &v.base,
        }
    }
    fn base_mut(&mut self) -> &mut PhonemeBase {
        match self {
            Phoneme::Consonant(c) => &mut c.base,
            Phoneme::Vowel(v) => &mut v.base,
        }
    }
    pub fn ipa(&self) -> &str {
        &self.base().ipa
    }
    pub fn graphemes(&self) -> &[String] {
        &self.base().graphemes
    }
    pub fn contexts(&self) -> &[String] {
        &self.base().contexts
    }
    pub fn notes(&self) -> Option<&str> {
        self.base().notes.as_deref()
    }
    pub fn with_graphemes<I, S>(mut self, graphemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_mut().graphemes = graphemes.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_mut().contexts = contexts.into_iter().map(Into::into).collect();
        self
    }
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.base_mut().notes = Some(notes.into());
        self
    }
}

impl From<ConsonantPhoneme> for Phoneme {
    fn from(c: ConsonantPhoneme) -> Self {
        Phoneme::Consonant(c)
    }
}

impl From<VowelPhoneme> for Phoneme {
    fn from(v: VowelPhoneme) -> Self {
        Phoneme::Vowel(v)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phoneme::Consonant(c) => match c.voicing {
                Some(v) => write!(f, "/{}/ {} {} {}", c.base.ipa, v, c.place, c.manner),
                None => write!(f, "/{}/ {} {}", c.base.ipa, c.place, c.manner),
            },
            Phoneme::Vowel(v) => {
                write!(f, "/{}/ {} {} {}", v.base.ipa, v.height, v.backness, v.rounding)
            }
        }
    }
}

// ------------- PhonemeRecord -------------

/// The flat, structurally typed phoneme shape used on the data boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhonemeRecord {
    #[serde(flatten)]
    pub base: PhonemeBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manner: Option<Manner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voicing: Option<Voicing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backness: Option<Backness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<Rounding>,
}

impl PhonemeRecord {
    /// True iff both `place` and `manner` are present.
    pub fn is_consonant(&self) -> bool {
        self.place.is_some() && self.manner.is_some()
    }
    /// True iff `height`, `backness` and `rounding` are all present.
    pub fn is_vowel(&self) -> bool {
        self.height.is_some() && self.backness.is_some() && self.rounding.is_some()
    }
}

fn rejected(record: &PhonemeRecord, reason: ShapeProblem) -> PhonoscopeError {
    PhonoscopeError::Classification { ipa: record.base.ipa.clone(), reason }
}

impl TryFrom<PhonemeRecord> for Phoneme {
    type Error = PhonoscopeError;

    fn try_from(record: PhonemeRecord) -> Result<Self> {
        let consonant = match (record.place, record.manner) {
            (Some(place), Some(manner)) => Some((place, manner)),
            _ => None,
        };
        let vowel = match (record.height, record.backness, record.rounding) {
            (Some(height), Some(backness), Some(rounding)) => Some((height, backness, rounding)),
            _ => None,
        };
        match (consonant, vowel) {
            (Some((place, manner)), None) => Ok(Phoneme::Consonant(ConsonantPhoneme {
                base: record.base,
                place,
                manner,
                voicing: record.voicing,
            })),
            // voicing only has meaning on the consonant grid
            (None, Some(_)) if record.voicing.is_some() => Err(rejected(&record, ShapeProblem::StrayVoicing)),
            (None, Some((height, backness, rounding))) => Ok(Phoneme::Vowel(VowelPhoneme {
                base: record.base,
                height,
                backness,
                rounding,
            })),
            (None, None) => Err(rejected(&record, ShapeProblem::Neither)),
            (Some(_), Some(_)) => Err(rejected(&record, ShapeProblem::Both)),
        }
    }
}

impl From<Phoneme> for PhonemeRecord {
    fn from(phoneme: Phoneme) -> Self {
        match phoneme {
            Phoneme::Consonant(c) => PhonemeRecord {
                base: c.base,
                place: Some(c.place),
                manner: Some(c.manner),
                voicing: c.voicing,
                ..PhonemeRecord::default()
            },
            Phoneme::Vowel(v) => PhonemeRecord {
                base: v.base,
                height: Some(v.height),
                backness: Some(v.backness),
                rounding: Some(v.rounding),
                ..PhonemeRecord::default()
            },
        }
    }
}

impl From<ConsonantPhoneme> for PhonemeRecord {
    fn from(c: ConsonantPhoneme) -> Self {
        Phoneme::Consonant(c).into()
    }
}

impl From<VowelPhoneme> for PhonemeRecord {
    fn from(v: VowelPhoneme) -> Self {
        Phoneme::Vowel(v).into()
    }
}
