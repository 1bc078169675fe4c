//! Settings read from `phonoscope.toml` (optional) and `PHONOSCOPE_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::reference::ReferenceTable;

pub const DEFAULT_FILE: &str = "phonoscope";
pub const ENV_PREFIX: &str = "PHONOSCOPE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// JSON catalog to load instead of the bundled one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log phonemes whose transcription is off the reference chart.
    #[serde(default = "default_reference_check")]
    pub reference_check: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_reference_check() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self { catalog: None, log_level: default_log_level(), reference_check: default_reference_check() }
    }
}

impl Settings {
    /// An explicit `path` must exist; otherwise `phonoscope.{toml,json,...}` is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    /// The configured catalog, or the bundled one.
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        if self.reference_check {
            let off_chart = catalog.nonconformances(ReferenceTable::standard()).len();
            debug!(off_chart, "reference check done");
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_file_overrides_defaults() {
        let path = std::env::temp_dir().join("phonoscope-settings-test.toml");
        fs::write(&path, "log_level = \"debug\"\nreference_check = false\n").unwrap();
        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.reference_check);
        assert_eq!(settings.catalog, None);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("phonoscope-settings-does-not-exist.toml");
        assert!(Settings::load(Some(path.as_path())).is_err());
    }
}
