//! The canonical IPA grids.
//!
//! Two independent grids map classification coordinates to the symbols IPA
//! reserves there: consonants by (manner, place) and vowels by
//! (height, backness, rounding). A lookup answers `None` when the cell was
//! never defined (an articulation that is not attested or judged impossible)
//! and `Some(&[])` when the slot exists but holds no symbol.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::classify::{Backness, Height, Manner, Phoneme, Place, Rounding};

use Backness::*;
use Height::*;
use Manner::*;
use Place::*;
use Rounding::*;

// ------------- Standard data -------------

const CONSONANT_CELLS: &[(Manner, Place, &[&str])] = &[
    (Plosive, Bilabial, &["p", "b"]),
    (Plosive, Labiodental, &["p̪", "b̪"]),
    (Plosive, Dental, &["t̪", "d̪"]),
    (Plosive, Alveolar, &["t", "d"]),
    (Plosive, Postalveolar, &["t̠", "d̠"]),
    (Plosive, Retroflex, &["ʈ", "ɖ"]),
    (Plosive, Palatal, &["c", "ɟ"]),
    (Plosive, Velar, &["k", "ɡ"]),
    (Plosive, Uvular, &["q", "ɢ"]),
    (Plosive, Glottal, &["ʔ"]),
    (Plosive, LabialVelar, &["k͡p", "ɡ͡b"]),
    (Nasal, Bilabial, &["m"]),
    (Nasal, Labiodental, &["ɱ"]),
    (Nasal, Dental, &["n̪"]),
    (Nasal, Alveolar, &["n"]),
    (Nasal, Postalveolar, &["n̠"]),
    (Nasal, Retroflex, &["ɳ"]),
    (Nasal, Palatal, &["ɲ"]),
    (Nasal, Velar, &["ŋ"]),
    (Nasal, Uvular, &["ɴ"]),
    (Nasal, Glottal, &["ŋ̈"]),
    (Nasal, LabialVelar, &["ŋ͡m"]),
    (Trill, Bilabial, &["ʙ"]),
    (Trill, Alveolar, &["r"]),
    (Trill, Uvular, &["ʀ"]),
    (TapFlap, Bilabial, &["ⱱ"]),
    (TapFlap, Alveolar, &["ɾ"]),
    (TapFlap, Retroflex, &["ɽ"]),
    (TapFlap, Uvular, &["ɢ̆"]),
    (Fricative, Bilabial, &["ɸ", "β"]),
    (Fricative, Labiodental, &["f", "v"]),
    (Fricative, Dental, &["θ", "ð"]),
    (Fricative, Alveolar, &["s", "z"]),
    (Fricative, Postalveolar, &["ʃ", "ʒ"]),
    (Fricative, Retroflex, &["ʂ", "ʐ"]),
    (Fricative, Palatal, &["ç", "ʝ"]),
    (Fricative, Velar, &["x", "ɣ"]),
    (Fricative, Uvular, &["χ", "ʁ"]),
    (Fricative, Pharyngeal, &["ħ", "ʕ"]),
    (Fricative, Glottal, &["h", "ɦ"]),
    (Fricative, LabialVelar, &["ʍ", "w̥"]),
    (LateralFricative, Alveolar, &["ɬ", "ɮ"]),
    (LateralFricative, Velar, &["ʟ̝"]),
    (LateralFricative, Uvular, &["ʟ̝˔"]),
    (Approximant, Bilabial, &["β̞"]),
    (Approximant, Labiodental, &["ʋ"]),
    (Approximant, Alveolar, &["ɹ"]),
    (Approximant, Retroflex, &["ɻ"]),
    (Approximant, Palatal, &["j"]),
    (Approximant, Velar, &["ɰ"]),
    (Approximant, LabialVelar, &["w"]),
    (LateralApproximant, Alveolar, &["l"]),
    (LateralApproximant, Retroflex, &["ɭ"]),
    (LateralApproximant, Palatal, &["ʎ"]),
    (LateralApproximant, Velar, &["ʟ"]),
    (Affricate, Labiodental, &["t͡f", "d͡v"]),
    (Affricate, Dental, &["t̪͡θ", "d̪͡ð"]),
    (Affricate, Alveolar, &["t͡s", "d͡z"]),
    (Affricate, Postalveolar, &["t͡ʃ", "d͡ʒ"]),
    (Affricate, Retroflex, &["ʈ͡ʂ", "ɖ͡ʐ"]),
    (Affricate, Palatal, &["c͡ç", "ɟ͡ʝ"]),
    (Affricate, Velar, &["k͡x", "ɡ͡ɣ"]),
    (Affricate, Uvular, &["q͡χ", "ɢ͡ʁ"]),
    (Affricate, LabialVelar, &["k͡pʷ"]),
];

const VOWEL_CELLS: &[(Height, Backness, Rounding, &str)] = &[
    (Close, Front, Unrounded, "i"),
    (Close, Front, Rounded, "y"),
    (Close, NearFront, Unrounded, "ɪ"),
    (Close, NearFront, Rounded, "ʏ"),
    (Close, Central, Unrounded, "ɨ"),
    (Close, Central, Rounded, "ʉ"),
    (Close, NearBack, Rounded, "ʊ"),
    (Close, Back, Unrounded, "ɯ"),
    (Close, Back, Rounded, "u"),
    (NearClose, Front, Unrounded, "ɪ"),
    (NearClose, Front, Rounded, "ʏ"),
    (NearClose, Central, Unrounded, "ɪ̈"),
    (NearClose, NearBack, Rounded, "ʊ̟"),
    (CloseMid, Front, Unrounded, "e"),
    (CloseMid, Front, Rounded, "ø"),
    (CloseMid, Central, Unrounded, "ɘ"),
    (CloseMid, Central, Rounded, "ɵ"),
    (CloseMid, Back, Unrounded, "ɤ"),
    (CloseMid, Back, Rounded, "o"),
    (Mid, Central, Unrounded, "ə"),
    (Mid, Central, Rounded, "ɚ"),
    (OpenMid, Front, Unrounded, "ɛ"),
    (OpenMid, Front, Rounded, "œ"),
    (OpenMid, Central, Unrounded, "ɜ"),
    (OpenMid, Central, Rounded, "ɞ"),
    (OpenMid, Back, Unrounded, "ʌ"),
    (OpenMid, Back, Rounded, "ɔ"),
    (NearOpen, Front, Unrounded, "æ"),
    (NearOpen, Central, Unrounded, "ɐ"),
    (Open, Front, Unrounded, "a"),
    (Open, Front, Rounded, "ɶ"),
    (Open, Central, Unrounded, "ä"),
    (Open, Central, Rounded, "ɒ̈"),
    (Open, Back, Unrounded, "ɑ"),
    (Open, Back, Rounded, "ɒ"),
];

lazy_static! {
    static ref STANDARD: ReferenceTable = ReferenceTable::from_cells(
        CONSONANT_CELLS
            .iter()
            .map(|(manner, place, symbols)| (*manner, *place, symbols.iter().map(|s| s.to_string()).collect())),
        VOWEL_CELLS
            .iter()
            .map(|(height, backness, rounding, symbol)| (*height, *backness, *rounding, vec![symbol.to_string()])),
    );
}

// ------------- Coordinates -------------

/// A position on one of the two grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coordinate {
    Consonant { manner: Manner, place: Place },
    Vowel { height: Height, backness: Backness, rounding: Rounding },
}

impl Coordinate {
    pub fn of(phoneme: &Phoneme) -> Self {
        match phoneme {
            Phoneme::Consonant(c) => Coordinate::Consonant { manner: c.manner, place: c.place },
            Phoneme::Vowel(v) => Coordinate::Vowel { height: v.height, backness: v.backness, rounding: v.rounding },
        }
    }
}

/// How a phoneme's transcription relates to the reference symbols at its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conformance {
    /// The transcription is one of the symbols listed in the cell.
    Canonical,
    /// The cell exists but does not list the transcription (aspirated, long, unreleased...).
    Variant,
    /// The coordinate is not defined in the table.
    Unattested,
}

// ------------- ReferenceTable -------------

#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    consonants: BTreeMap<(Manner, Place), Vec<String>>,
    vowels: BTreeMap<(Height, Backness, Rounding), Vec<String>>,
}

impl ReferenceTable {
    /// The process-wide IPA chart.
    pub fn standard() -> &'static ReferenceTable {
        &STANDARD
    }

    /// Builds a table from explicit cells. A coordinate given twice keeps the last symbols.
    pub fn from_cells<C, V>(consonants: C, vowels: V) -> Self
    where
        C: IntoIterator<Item = (Manner, Place, Vec<String>)>,
        V: IntoIterator<Item = (Height, Backness, Rounding, Vec<String>)>,
    {
        Self {
            consonants: consonants
                .into_iter()
                .map(|(manner, place, symbols)| ((manner, place), symbols))
                .collect(),
            vowels: vowels
                .into_iter()
                .map(|(height, backness, rounding, symbols)| ((height, backness, rounding), symbols))
                .collect(),
        }
    }

    pub fn consonant(&self, manner: Manner, place: Place) -> Option<&[String]> {
        self.consonants.get(&(manner, place)).map(Vec::as_slice)
    }

    pub fn vowel(&self, height: Height, backness: Backness, rounding: Rounding) -> Option<&[String]> {
        self.vowels.get(&(height, backness, rounding)).map(Vec::as_slice)
    }

    pub fn cell(&self, coordinate: Coordinate) -> Option<&[String]> {
        match coordinate {
            Coordinate::Consonant { manner, place } => self.consonant(manner, place),
            Coordinate::Vowel { height, backness, rounding } => self.vowel(height, backness, rounding),
        }
    }

    /// Defined consonant cells in chart order (manner first, then place).
    pub fn consonant_cells(&self) -> impl Iterator<Item = (Manner, Place, &[String])> + '_ {
        self.consonants
            .iter()
            .map(|((manner, place), symbols)| (*manner, *place, symbols.as_slice()))
    }

    /// Defined vowel cells in chart order (height, backness, rounding).
    pub fn vowel_cells(&self) -> impl Iterator<Item = (Height, Backness, Rounding, &[String])> + '_ {
        self.vowels
            .iter()
            .map(|((height, backness, rounding), symbols)| (*height, *backness, *rounding, symbols.as_slice()))
    }

    pub fn conformance(&self, phoneme: &Phoneme) -> Conformance {
        match self.cell(Coordinate::of(phoneme)) {
            None => Conformance::Unattested,
            Some(symbols) if symbols.iter().any(|s| s == phoneme.ipa()) => Conformance::Canonical,
            Some(_) => Conformance::Variant,
        }
    }

    /// Every coordinate that lists `symbol`, in chart order, consonants first.
    pub fn locate(&self, symbol: &str) -> Vec<Coordinate> {
        let consonants = self
            .consonant_cells()
            .filter(|(_, _, symbols)| symbols.iter().any(|s| s == symbol))
            .map(|(manner, place, _)| Coordinate::Consonant { manner, place });
        let vowels = self
            .vowel_cells()
            .filter(|(_, _, _, symbols)| symbols.iter().any(|s| s == symbol))
            .map(|(height, backness, rounding, _)| Coordinate::Vowel { height, backness, rounding });
        consonants.chain(vowels).collect()
    }
}
