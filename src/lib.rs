//! strongpass - password generation from selectable character categories.
//!
//! The [`PasswordEngine`] draws passwords from an injected [`RandomSource`];
//! the [`StrengthEstimator`] scores them for display. Both are free of
//! retained state beyond the random source itself.
//!
//! # Example
//!
//! ```
//! use strongpass::{CharacterCategory, GenerationConfig, PasswordEngine, StrengthEstimator};
//!
//! let config = GenerationConfig::new()
//!     .with_length(20)
//!     .with_category(CharacterCategory::Symbols, false)
//!     .with_exclude_similar(true);
//!
//! let mut engine = PasswordEngine::new();
//! let generated = engine.generate(&config)?;
//! assert_eq!(generated.password.len(), 20);
//!
//! let strength = generated.strength(&StrengthEstimator::default());
//! println!("{} ({})", generated.password, strength.level.label);
//! # Ok::<(), strongpass::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod strength;
pub mod terminal;

pub use error::{Error, Result};
pub use pass::{
    CharacterCategory, Coverage, Generated, GenerationConfig, Password, PasswordEngine, Pool,
};
pub use crate::rand::{CryptoSource, FallbackSource, RandomSource, SourceKind};
pub use strength::{Heuristic, Strength, StrengthEstimator, StrengthLevel};
