//! Chart models: the reference grid with one language's phonemes overlaid.
//!
//! Nothing here renders; a presentation layer walks the rows and cells.

use crate::classify::{Backness, ConsonantPhoneme, Height, Manner, Place, Rounding, VowelPhoneme};
use crate::inventory::Language;
use crate::reference::ReferenceTable;

// ------------- Consonants -------------

#[derive(Debug, Clone)]
pub struct ConsonantCell<'a> {
    pub place: Place,
    /// `None` when the reference table does not define the cell.
    pub reference: Option<&'a [String]>,
    /// The language's consonants here, voiceless before voiced, then inventory order.
    pub phonemes: Vec<&'a ConsonantPhoneme>,
}

#[derive(Debug, Clone)]
pub struct ConsonantRow<'a> {
    pub manner: Manner,
    pub cells: Vec<ConsonantCell<'a>>,
}

#[derive(Debug, Clone)]
pub struct ConsonantChart<'a> {
    pub rows: Vec<ConsonantRow<'a>>,
}

impl<'a> ConsonantChart<'a> {
    pub fn build(language: &'a Language, table: &'a ReferenceTable) -> Self {
        let rows = Manner::ALL
            .iter()
            .map(|&manner| ConsonantRow {
                manner,
                cells: Place::ALL
                    .iter()
                    .map(|&place| {
                        let mut phonemes: Vec<&ConsonantPhoneme> = language
                            .consonants()
                            .filter(|c| c.manner == manner && c.place == place)
                            .collect();
                        phonemes.sort_by_key(|c| c.voicing.map_or(usize::MAX, |v| v.ordinal()));
                        ConsonantCell { place, reference: table.consonant(manner, place), phonemes }
                    })
                    .collect(),
            })
            .collect();
        ConsonantChart { rows }
    }

    /// Drops rows and columns where the language has nothing.
    pub fn compact(mut self) -> Self {
        let used: Vec<Place> = Place::ALL
            .iter()
            .copied()
            .filter(|&place| {
                self.rows
                    .iter()
                    .any(|row| row.cells.iter().any(|cell| cell.place == place && !cell.phonemes.is_empty()))
            })
            .collect();
        self.rows.retain(|row| row.cells.iter().any(|cell| !cell.phonemes.is_empty()));
        for row in &mut self.rows {
            row.cells.retain(|cell| used.contains(&cell.place));
        }
        self
    }

    pub fn places(&self) -> Vec<Place> {
        self.rows
            .first()
            .map(|row| row.cells.iter().map(|cell| cell.place).collect())
            .unwrap_or_default()
    }

    pub fn cell(&self, manner: Manner, place: Place) -> Option<&ConsonantCell<'a>> {
        self.rows
            .iter()
            .find(|row| row.manner == manner)?
            .cells
            .iter()
            .find(|cell| cell.place == place)
    }
}

// ------------- Vowels -------------

#[derive(Debug, Clone)]
pub struct VowelSlot<'a> {
    pub reference: Option<&'a [String]>,
    pub phonemes: Vec<&'a VowelPhoneme>,
}

#[derive(Debug, Clone)]
pub struct VowelCell<'a> {
    pub backness: Backness,
    pub unrounded: VowelSlot<'a>,
    pub rounded: VowelSlot<'a>,
}

impl<'a> VowelCell<'a> {
    pub fn slot(&self, rounding: Rounding) -> &VowelSlot<'a> {
        match rounding {
            Rounding::Unrounded => &self.unrounded,
            Rounding::Rounded => &self.rounded,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.unrounded.phonemes.is_empty() && self.rounded.phonemes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct VowelRow<'a> {
    pub height: Height,
    pub cells: Vec<VowelCell<'a>>,
}

#[derive(Debug, Clone)]
pub struct VowelChart<'a> {
    pub rows: Vec<VowelRow<'a>>,
}

impl<'a> VowelChart<'a> {
    pub fn build(language: &'a Language, table: &'a ReferenceTable) -> Self {
        let slot = |height: Height, backness: Backness, rounding: Rounding| VowelSlot {
            reference: table.vowel(height, backness, rounding),
            phonemes: language
                .vowels()
                .filter(|v| v.height == height && v.backness == backness && v.rounding == rounding)
                .collect(),
        };
        let rows = Height::ALL
            .iter()
            .map(|&height| VowelRow {
                height,
                cells: Backness::ALL
                    .iter()
                    .map(|&backness| VowelCell {
                        backness,
                        unrounded: slot(height, backness, Rounding::Unrounded),
                        rounded: slot(height, backness, Rounding::Rounded),
                    })
                    .collect(),
            })
            .collect();
        VowelChart { rows }
    }

    /// Drops heights where the language has no vowel.
    pub fn compact(mut self) -> Self {
        self.rows.retain(|row| row.cells.iter().any(|cell| !cell.is_empty()));
        self
    }

    pub fn cell(&self, height: Height, backness: Backness) -> Option<&VowelCell<'a>> {
        self.rows
            .iter()
            .find(|row| row.height == height)?
            .cells
            .iter()
            .find(|cell| cell.backness == backness)
    }
}
