use std::collections::HashSet;

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use strongpass::pass::SIMILAR;
use strongpass::{
    CharacterCategory, Coverage, CryptoSource, Error, GenerationConfig, Heuristic, PasswordEngine,
    RandomSource, SourceKind, StrengthEstimator,
};

fn seeded(seed: u64) -> PasswordEngine {
    PasswordEngine::with_source(Box::new(CryptoSource::new(ChaCha20Rng::seed_from_u64(seed))))
}

/// Always fails, like a missing entropy device.
struct Unavailable;

impl RandomSource for Unavailable {
    fn try_next_u32(&mut self) -> Result<u32, rand_core::Error> {
        Err(rand_core::Error::new("no entropy device"))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Crypto
    }
}

/// Returns the same value forever.
struct Constant(u32);

impl RandomSource for Constant {
    fn try_next_u32(&mut self) -> Result<u32, rand_core::Error> {
        Ok(self.0)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Crypto
    }
}

fn configs() -> Vec<GenerationConfig> {
    let mut configs = Vec::new();
    for length in [8, 13, 16, 32] {
        for mask in 1u8..16 {
            for coverage in [Coverage::Guaranteed, Coverage::BestEffort] {
                let mut config = GenerationConfig::empty()
                    .with_length(length)
                    .with_coverage(coverage)
                    .with_exclude_similar(mask % 3 == 0)
                    .with_exclude_repeats(mask % 2 == 0);
                for (bit, category) in CharacterCategory::ALL.into_iter().enumerate() {
                    config = config.with_category(category, mask & (1 << bit) != 0);
                }
                configs.push(config);
            }
        }
    }
    configs
}

#[test]
fn output_has_requested_length() {
    let mut engine = seeded(10);
    for config in configs() {
        let generated = engine.generate(&config).unwrap();
        assert_eq!(generated.password.len(), config.length, "{config:?}");
    }
}

#[test]
fn output_stays_inside_pool() {
    let mut engine = seeded(11);
    for config in configs() {
        let generated = engine.generate(&config).unwrap();
        let pool = config.pool();
        assert!(
            generated.password.chars().all(|c| pool.contains(c)),
            "{} escaped {pool}",
            generated.password
        );
        assert_eq!(generated.pool, pool);
    }
}

#[test]
fn no_categories_is_rejected() {
    let mut engine = seeded(12);
    let config = GenerationConfig::empty().with_length(8);
    assert_eq!(engine.generate(&config).unwrap_err(), Error::NoCharacterPool);
}

#[test]
fn similar_characters_never_appear() {
    let mut engine = seeded(13);
    let config = GenerationConfig::new().with_length(32).with_exclude_similar(true);
    for _ in 0..500 {
        let generated = engine.generate(&config).unwrap();
        assert!(!generated.password.chars().any(|c| SIMILAR.contains(&c)));
    }
}

#[test]
fn digits_without_similar_use_eight_chars() {
    let mut engine = seeded(14);
    let config = GenerationConfig::empty()
        .with_length(8)
        .with_category(CharacterCategory::Digits, true)
        .with_exclude_similar(true);

    let generated = engine.generate(&config).unwrap();
    assert_eq!(generated.pool.to_string(), "23456789");
    for _ in 0..200 {
        let generated = engine.generate(&config).unwrap();
        assert!(generated.password.chars().all(|c| "23456789".contains(c)));
    }
}

#[test]
fn all_categories_show_up_across_trials() {
    for coverage in [Coverage::Guaranteed, Coverage::BestEffort] {
        let mut engine = seeded(15);
        let config = GenerationConfig::new().with_coverage(coverage);
        let covered = (0..200)
            .filter(|_| {
                let generated = engine.generate(&config).unwrap();
                CharacterCategory::ALL.iter().all(|category| {
                    generated
                        .password
                        .chars()
                        .any(|c| category.alphabet().contains(c))
                })
            })
            .count();
        assert!(covered >= 195, "{coverage:?}: only {covered} of 200 covered");
    }
}

#[test]
fn os_source_does_not_repeat_itself() {
    let mut engine = PasswordEngine::new();
    let config = GenerationConfig::default();
    let outputs: HashSet<String> = (0..20)
        .map(|_| engine.generate(&config).unwrap().password.to_string())
        .collect();
    assert!(outputs.len() > 1);
}

#[test]
fn unavailable_source_falls_back() {
    let mut engine = PasswordEngine::with_source(Box::new(Unavailable));
    assert_eq!(engine.source(), SourceKind::Crypto);

    let generated = engine.generate(&GenerationConfig::default()).unwrap();
    assert_eq!(generated.source, SourceKind::Fallback);
    assert_eq!(generated.password.len(), 16);
    assert_eq!(engine.source(), SourceKind::Fallback);
}

#[test]
fn crypto_path_is_reported() {
    let generated = seeded(16).generate(&GenerationConfig::default()).unwrap();
    assert_eq!(generated.source, SourceKind::Crypto);
}

#[test]
fn repeat_avoidance_gives_up_gracefully() {
    let mut engine = PasswordEngine::with_source(Box::new(Constant(0)));
    let config = GenerationConfig::empty()
        .with_category(CharacterCategory::Digits, true)
        .with_length(8)
        .with_exclude_repeats(true);
    for coverage in [Coverage::Guaranteed, Coverage::BestEffort] {
        let generated = engine.generate(&config.clone().with_coverage(coverage)).unwrap();
        assert_eq!(generated.password.as_str(), "00000000");
    }
}

#[test]
fn classification_is_deterministic() {
    let mut engine = seeded(17);
    for heuristic in [Heuristic::Entropy, Heuristic::Linear] {
        let estimator = StrengthEstimator::new(heuristic);
        for config in configs() {
            let generated = engine.generate(&config).unwrap();
            let first = generated.strength(&estimator);
            let second = estimator.classify(generated.password.as_str(), &config.pool());
            assert_eq!(first, second);
        }
    }
}

#[test]
fn longer_never_scores_lower() {
    let mut engine = seeded(18);
    let estimator = StrengthEstimator::default();
    for config in configs().into_iter().filter(|c| c.length == 32) {
        let generated = engine.generate(&config).unwrap();
        let password = generated.password.as_str();
        let scores: Vec<f64> = (8..=32)
            .map(|len| estimator.score(&password[..len], &generated.pool))
            .collect();
        assert!(
            scores.windows(2).all(|w| w[1] >= w[0]),
            "{password}: {scores:?}"
        );
    }
}

#[test]
fn repeated_lowercase_rates_low() {
    let pool = GenerationConfig::empty()
        .with_category(CharacterCategory::Lowercase, true)
        .pool();
    let strength = StrengthEstimator::default().classify("aaaaaaaa", &pool);
    assert_eq!(strength.level.rank, 1);
}

#[test]
fn more_length_more_tier_on_fixed_pool() {
    let mut engine = seeded(19);
    let estimator = StrengthEstimator::default();
    let short = engine.generate(&GenerationConfig::new().with_length(8)).unwrap();
    let long = engine.generate(&GenerationConfig::new().with_length(32)).unwrap();
    assert!(long.strength(&estimator).level.rank >= short.strength(&estimator).level.rank);
    assert_eq!(long.strength(&estimator).level.label, "Very high");
}
