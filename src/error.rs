//! Error types for password generation.

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

/// Errors the engine rejects a request with.
///
/// Degraded conditions (weak randomness, exhausted retries) are not errors:
/// generation still succeeds with a best-effort result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No characters left after category selection and similar-char filtering.
    #[error("no character pool: select at least one character type")]
    NoCharacterPool,

    /// Requested length is outside the supported range.
    #[error("password length {0} is outside {min}..={max}", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(usize),
}

/// A specialized `Result` type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
