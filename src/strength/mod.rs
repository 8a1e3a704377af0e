//! Heuristic password strength.
//!
//! Two heuristics are available:
//!
//! - [`Heuristic::Entropy`] (default): `len × log2(pool)` bits, plus a flat
//!   bonus for each character class present in the password, minus a penalty
//!   per repeated character. The penalty per repeat is capped at one
//!   character's worth of bits, so appending a character never lowers the score.
//! - [`Heuristic::Linear`]: `len × enabled categories`. Ignores pool size and
//!   what actually ended up in the password.
//!
//! Both are pure: the same input always yields the same [`Strength`].

mod levels;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pass::Pool;

pub use levels::{ENTROPY_LEVELS, LINEAR_LEVELS, NEUTRAL, StrengthLevel};

/// Bonus for each of lowercase, uppercase, digit, other present in the password.
pub const CLASS_BONUS: f64 = 10.0;
/// Upper bound of the penalty for each position repeating an earlier character.
pub const REPEAT_PENALTY: f64 = 4.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    #[default]
    Entropy,
    Linear,
}

/// A computed score and the tier it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    pub score: f64,
    pub level: &'static StrengthLevel,
}

impl Strength {
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            level: &NEUTRAL,
        }
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.level.rank == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthEstimator {
    heuristic: Heuristic,
}

impl StrengthEstimator {
    #[must_use]
    pub const fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Classify a password drawn from `pool`.
    ///
    /// An empty password or pool yields the neutral tier.
    #[must_use]
    pub fn classify(&self, password: &str, pool: &Pool) -> Strength {
        if password.is_empty() || pool.is_empty() {
            return Strength::neutral();
        }

        let score = self.score(password, pool);
        let ladder: &'static [StrengthLevel] = match self.heuristic {
            Heuristic::Entropy => &ENTROPY_LEVELS,
            Heuristic::Linear => &LINEAR_LEVELS,
        };

        Strength {
            score,
            level: levels::select(ladder, score),
        }
    }

    /// Raw score under this estimator's heuristic.
    #[must_use]
    pub fn score(&self, password: &str, pool: &Pool) -> f64 {
        if password.is_empty() || pool.is_empty() {
            return 0.0;
        }

        let length = password.chars().count();
        match self.heuristic {
            Heuristic::Entropy => {
                let bits_per_char = (pool.len() as f64).log2();
                let distinct = password.chars().collect::<BTreeSet<_>>().len();
                let repeats = length - distinct;

                // len × bits − repeats × penalty, with each term non-decreasing in len.
                distinct as f64 * bits_per_char
                    + repeats as f64 * (bits_per_char - REPEAT_PENALTY.min(bits_per_char))
                    + class_bonus(password)
            }
            Heuristic::Linear => (length * pool.segments().len()) as f64,
        }
    }
}

/// Password entropy in bits for a uniformly drawn password.
#[must_use]
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

fn class_bonus(password: &str) -> f64 {
    let classes: [fn(&char) -> bool; 4] = [
        char::is_ascii_lowercase,
        char::is_ascii_uppercase,
        char::is_ascii_digit,
        |c| !c.is_ascii_alphanumeric(),
    ];

    classes
        .iter()
        .filter(|class| password.chars().any(|c| class(&c)))
        .count() as f64
        * CLASS_BONUS
}
