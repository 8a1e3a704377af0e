//! Generation configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::charset::{CharacterCategory, Pool};
use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

/// How the engine makes sure every enabled category shows up in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coverage {
    /// Seed one char per category, fill from the whole pool, then shuffle.
    #[default]
    Guaranteed,
    /// Draw whole candidates and retry a bounded number of times.
    BestEffort,
}

/// Settings for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub categories: BTreeSet<CharacterCategory>,
    pub exclude_similar: bool,
    pub exclude_repeats: bool,
    pub coverage: Coverage,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            categories: CharacterCategory::ALL.into_iter().collect(),
            exclude_similar: false,
            exclude_repeats: false,
            coverage: Coverage::default(),
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with nothing enabled; chain `with_category` calls onto it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: BTreeSet::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CharacterCategory, enabled: bool) -> Self {
        if enabled {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
        self
    }

    #[must_use]
    pub fn with_exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }

    #[must_use]
    pub fn with_exclude_repeats(mut self, exclude: bool) -> Self {
        self.exclude_repeats = exclude;
        self
    }

    #[must_use]
    pub fn with_coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Check the length bounds. Pool emptiness is reported by the engine.
    pub fn validate(&self) -> Result<()> {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            Ok(())
        } else {
            Err(Error::LengthOutOfRange(self.length))
        }
    }

    #[must_use]
    pub fn pool(&self) -> Pool {
        Pool::build(&self.categories, self.exclude_similar)
    }
}
