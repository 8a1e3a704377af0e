//! Random sources for password sampling.
//!
//! The engine draws from a [`RandomSource`]. [`probe`] picks the OS CSPRNG
//! when it works and the hardware-entropy [`FallbackSource`] otherwise.

mod fallback;

use ::rand::rngs::OsRng;
use rand_core::{CryptoRng, Error, RngCore};

pub use fallback::FallbackSource;

/// Which generator produced a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Crypto,
    Fallback,
}

impl SourceKind {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Crypto => "OS CSPRNG",
            Self::Fallback => fallback::COUNTER,
        }
    }

    #[must_use]
    pub const fn is_cryptographic(self) -> bool {
        matches!(self, Self::Crypto)
    }
}

/// A source of uniformly distributed `u32` values.
pub trait RandomSource: Send {
    fn try_next_u32(&mut self) -> Result<u32, Error>;

    fn kind(&self) -> SourceKind;
}

/// Wraps any cryptographically secure `RngCore`.
pub struct CryptoSource<R = OsRng>(R);

impl CryptoSource<OsRng> {
    #[must_use]
    pub const fn os() -> Self {
        Self(OsRng)
    }
}

impl<R: RngCore + CryptoRng + Send> CryptoSource<R> {
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngCore + CryptoRng + Send> RandomSource for CryptoSource<R> {
    fn try_next_u32(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.0.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Crypto
    }
}

/// Pick the best available source, checking the OS generator once.
#[must_use]
pub fn probe() -> Box<dyn RandomSource> {
    let mut buf = [0u8; 4];
    match OsRng.try_fill_bytes(&mut buf) {
        Ok(()) => Box::new(CryptoSource::os()),
        Err(e) => {
            log::warn!(
                "OS random source unavailable ({e}); falling back to {}",
                fallback::COUNTER
            );
            Box::new(FallbackSource::new())
        }
    }
}

/// Sampling handle owned by the engine.
///
/// If the primary source fails it is replaced by a [`FallbackSource`] for the
/// rest of the sampler's life, and [`Sampler::kind`] reports the downgrade.
pub struct Sampler {
    source: Box<dyn RandomSource>,
}

impl Sampler {
    #[must_use]
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    pub fn next_u32(&mut self) -> u32 {
        match self.source.try_next_u32() {
            Ok(value) => value,
            Err(e) => {
                log::warn!(
                    "random source failed ({e}); falling back to {}",
                    fallback::COUNTER
                );
                let mut fallback = FallbackSource::new();
                let value = fallback.next_u32();
                self.source = Box::new(fallback);
                value
            }
        }
    }

    /// Uniform index in `0..bound`, by modulo reduction. The bias is at most
    /// `bound / 2^32` and accepted.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.next_u32() as usize % bound
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }
}
