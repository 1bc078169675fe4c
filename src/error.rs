use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonoscopeError {
    #[error("Classification error for /{ipa}/: {reason}")]
    Classification { ipa: String, reason: ShapeProblem },
    #[error("Inventory error in '{language}': {issue}")]
    Inventory { language: String, issue: InventoryIssue },
    #[error("Unknown {kind}: '{name}'")]
    UnknownName { kind: &'static str, name: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, PhonoscopeError>;

/// Why a phoneme record could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeProblem {
    Neither,
    Both,
    StrayVoicing,
}

impl fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeProblem::Neither => write!(f, "record is neither a consonant nor a vowel"),
            ShapeProblem::Both => write!(f, "record is both a consonant and a vowel"),
            ShapeProblem::StrayVoicing => write!(f, "vowel record carries a consonant voicing"),
        }
    }
}

/// Consistency problems found while accepting a language record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryIssue {
    DuplicatePhoneme { ipa: String },
    UnknownRulePhoneme { rule: String, phoneme: String },
    DuplicateEnvironment { rule: String, environment: String },
    DuplicateRuleName { rule: String },
    EmptyRealizations { rule: String },
    DuplicateLanguage,
}

impl fmt::Display for InventoryIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryIssue::DuplicatePhoneme { ipa } => {
                write!(f, "duplicate phoneme /{ipa}/")
            }
            InventoryIssue::UnknownRulePhoneme { rule, phoneme } => {
                write!(f, "rule '{rule}' refers to /{phoneme}/ which is not in the inventory")
            }
            InventoryIssue::DuplicateEnvironment { rule, environment } => {
                write!(f, "rule '{rule}' lists environment '{environment}' more than once")
            }
            InventoryIssue::DuplicateRuleName { rule } => write!(f, "duplicate rule name '{rule}'"),
            InventoryIssue::EmptyRealizations { rule } => write!(f, "rule '{rule}' has no realizations"),
            InventoryIssue::DuplicateLanguage => write!(f, "language id is already in the catalog"),
        }
    }
}

// Helper conversions
impl From<serde_json::Error> for PhonoscopeError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e.to_string()) }
}

impl From<std::io::Error> for PhonoscopeError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}

impl From<config::ConfigError> for PhonoscopeError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
