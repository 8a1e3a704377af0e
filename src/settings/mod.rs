//! Persisted defaults for the command line.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pass::GenerationConfig;
use crate::strength::Heuristic;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub heuristic: Heuristic,
    pub generation: GenerationConfig,
}

impl Settings {
    /// A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    #[must_use]
    pub fn path() -> PathBuf {
        file::default_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_passwords: 1,
            to_clipboard: false,
            heuristic: Heuristic::default(),
            generation: GenerationConfig::default(),
        }
    }
}
