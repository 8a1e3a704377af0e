//! Character categories and effective pool building.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*";

/// Characters dropped from every alphabet when similar-looking chars are excluded.
pub const SIMILAR: &[char] = &['0', 'O', '1', 'l', 'I', '|'];

/// A named, togglable set of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterCategory {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterCategory {
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Digits, Self::Symbols];

    #[must_use]
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digits => DIGITS,
            Self::Symbols => SYMBOLS,
        }
    }

    /// The category's alphabet, optionally without [`SIMILAR`] characters.
    #[must_use]
    pub fn filtered(self, exclude_similar: bool) -> Vec<char> {
        self.alphabet()
            .chars()
            .filter(|c| !(exclude_similar && is_similar(*c)))
            .collect()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digits => "digits",
            Self::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
#[must_use]
pub fn is_similar(c: char) -> bool {
    SIMILAR.contains(&c)
}

/// One enabled category's contribution to the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub category: CharacterCategory,
    pub chars: Vec<char>,
}

/// The effective pool: enabled, filtered alphabets concatenated in category order.
///
/// Segments left empty by filtering are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    segments: Vec<Segment>,
    chars: Vec<char>,
}

impl Pool {
    /// Build the pool for a category selection.
    #[must_use]
    pub fn build(categories: &BTreeSet<CharacterCategory>, exclude_similar: bool) -> Self {
        let segments: Vec<Segment> = categories
            .iter()
            .map(|&category| Segment {
                category,
                chars: category.filtered(exclude_similar),
            })
            .filter(|segment| !segment.chars.is_empty())
            .collect();

        let chars = segments
            .iter()
            .flat_map(|segment| segment.chars.iter().copied())
            .collect();

        Self { segments, chars }
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn categories(&self) -> impl Iterator<Item = CharacterCategory> + '_ {
        self.segments.iter().map(|segment| segment.category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct characters (built-in alphabets never overlap, but
    /// this does not rely on it).
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.chars.iter().collect::<BTreeSet<_>>().len()
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
