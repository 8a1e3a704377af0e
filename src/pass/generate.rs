//! Password generation.

use zeroize::Zeroize;

use super::Password;
use super::charset::Pool;
use super::config::{Coverage, GenerationConfig};
use super::retry::Attempts;
use crate::error::{Error, Result};
use crate::rand::{self, RandomSource, Sampler, SourceKind};
use crate::strength::{Strength, StrengthEstimator};

/// Output of a generation call.
#[derive(Debug)]
pub struct Generated {
    pub password: Password,
    /// The effective pool the password was drawn from.
    pub pool: Pool,
    /// Which random path produced the password.
    pub source: SourceKind,
}

impl Generated {
    #[must_use]
    pub fn strength(&self, estimator: &StrengthEstimator) -> Strength {
        estimator.classify(self.password.as_str(), &self.pool)
    }
}

/// Draws passwords from an owned random source. Holds no other state.
pub struct PasswordEngine {
    sampler: Sampler,
}

impl PasswordEngine {
    /// Engine over the best available source (see [`rand::probe`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(rand::probe())
    }

    #[must_use]
    pub fn with_source(source: Box<dyn RandomSource>) -> Self {
        Self {
            sampler: Sampler::new(source),
        }
    }

    /// Source currently in use; changes to `Fallback` if the primary failed.
    #[must_use]
    pub fn source(&self) -> SourceKind {
        self.sampler.kind()
    }

    /// Generate one password.
    ///
    /// Fails with [`Error::NoCharacterPool`] when nothing is left to draw
    /// from, and with [`Error::LengthOutOfRange`] for unsupported lengths.
    /// Repeat avoidance and best-effort coverage degrade silently.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Generated> {
        config.validate()?;

        let pool = config.pool();
        if pool.is_empty() {
            return Err(Error::NoCharacterPool);
        }

        let avoid_repeats = config.exclude_repeats && pool.distinct() > 1;
        let mut chars = match config.coverage {
            Coverage::Guaranteed => self.seeded(&pool, config.length, avoid_repeats),
            Coverage::BestEffort => self.best_effort(&pool, config.length, avoid_repeats),
        };

        let password = Password::from_chars(&chars);
        chars.zeroize();

        Ok(Generated {
            password,
            pool,
            source: self.sampler.kind(),
        })
    }

    /// One char from every segment, the rest from the whole pool, shuffled.
    /// Requires `length >= pool.segments().len()`, which the length bounds ensure.
    fn seeded(&mut self, pool: &Pool, length: usize, avoid_repeats: bool) -> Vec<char> {
        let mut chars = Vec::with_capacity(length);
        for segment in pool.segments() {
            chars.push(self.pick(&segment.chars));
        }
        while chars.len() < length {
            chars.push(self.pick(pool.chars()));
        }
        self.shuffle(&mut chars);

        if avoid_repeats {
            self.break_repeats(pool, &mut chars);
        }
        chars
    }

    fn best_effort(&mut self, pool: &Pool, length: usize, avoid_repeats: bool) -> Vec<char> {
        let mut chars = Vec::with_capacity(length);
        self.fill(pool, length, avoid_repeats, &mut chars);

        let outcome = Attempts::REGENERATE.until(
            &mut chars,
            |chars| self.fill(pool, length, avoid_repeats, chars),
            |chars| covers(pool, chars),
        );
        if outcome.is_exhausted() {
            log::debug!(
                "category coverage not reached after {} attempts; keeping last candidate",
                Attempts::REGENERATE.limit()
            );
        }
        chars
    }

    fn fill(&mut self, pool: &Pool, length: usize, avoid_repeats: bool, chars: &mut Vec<char>) {
        chars.zeroize();
        chars.clear();
        for _ in 0..length {
            let mut c = self.pick(pool.chars());
            if avoid_repeats && let Some(&prev) = chars.last() {
                self.redraw_unless_distinct(pool, &mut c, prev);
            }
            chars.push(c);
        }
    }

    /// Redraw every char that repeats its left neighbour. A redrawn char
    /// always leaves an equal neighbour behind, so seeded coverage survives.
    fn break_repeats(&mut self, pool: &Pool, chars: &mut [char]) {
        for i in 1..chars.len() {
            let prev = chars[i - 1];
            if chars[i] == prev {
                self.redraw_unless_distinct(pool, &mut chars[i], prev);
            }
        }
    }

    fn redraw_unless_distinct(&mut self, pool: &Pool, c: &mut char, prev: char) {
        let outcome = Attempts::REDRAW.until(c, |c| *c = self.pick(pool.chars()), |c| *c != prev);
        if outcome.is_exhausted() {
            log::debug!("accepting adjacent repeat after {} redraws", Attempts::REDRAW.limit());
        }
    }

    #[inline]
    fn pick(&mut self, chars: &[char]) -> char {
        chars[self.sampler.below(chars.len())]
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        for i in (1..chars.len()).rev() {
            let j = self.sampler.below(i + 1);
            chars.swap(i, j);
        }
    }
}

impl Default for PasswordEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn covers(pool: &Pool, chars: &[char]) -> bool {
    pool.segments()
        .iter()
        .all(|segment| chars.iter().any(|c| segment.chars.contains(c)))
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    use super::*;
    use crate::pass::CharacterCategory;
    use crate::rand::CryptoSource;

    fn engine(seed: u64) -> PasswordEngine {
        PasswordEngine::with_source(Box::new(CryptoSource::new(ChaCha20Rng::seed_from_u64(seed))))
    }

    fn has_adjacent_repeat(s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        chars.windows(2).any(|w| w[0] == w[1])
    }

    #[test]
    fn seeded_covers_every_segment() {
        let mut engine = engine(1);
        let config = GenerationConfig::new().with_length(8);
        for _ in 0..200 {
            let generated = engine.generate(&config).unwrap();
            let chars: Vec<char> = generated.password.chars().collect();
            assert!(covers(&generated.pool, &chars));
        }
    }

    #[test]
    fn best_effort_keeps_length_and_pool() {
        let mut engine = engine(2);
        let config = GenerationConfig::new().with_coverage(Coverage::BestEffort);
        for _ in 0..100 {
            let generated = engine.generate(&config).unwrap();
            assert_eq!(generated.password.len(), 16);
            assert!(generated.password.chars().all(|c| generated.pool.contains(c)));
        }
    }

    #[test]
    fn exclude_repeats_with_large_pool() {
        let mut engine = engine(3);
        for coverage in [Coverage::Guaranteed, Coverage::BestEffort] {
            let config = GenerationConfig::new()
                .with_length(32)
                .with_exclude_repeats(true)
                .with_coverage(coverage);
            for _ in 0..200 {
                let generated = engine.generate(&config).unwrap();
                assert!(!has_adjacent_repeat(generated.password.as_str()));
            }
        }
    }

    #[test]
    fn exclude_repeats_keeps_seeded_coverage() {
        let mut engine = engine(4);
        let config = GenerationConfig::empty()
            .with_category(CharacterCategory::Digits, true)
            .with_category(CharacterCategory::Symbols, true)
            .with_exclude_repeats(true);
        for _ in 0..200 {
            let generated = engine.generate(&config).unwrap();
            let chars: Vec<char> = generated.password.chars().collect();
            assert!(covers(&generated.pool, &chars));
        }
    }

    #[test]
    fn rejects_bad_length_before_pool() {
        let mut engine = engine(5);
        let config = GenerationConfig::empty().with_length(4);
        assert_eq!(engine.generate(&config).unwrap_err(), Error::LengthOutOfRange(4));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut engine = engine(6);
        let mut chars: Vec<char> = "abcdefgh".chars().collect();
        engine.shuffle(&mut chars);
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(sorted.iter().collect::<String>(), "abcdefgh");
    }
}
