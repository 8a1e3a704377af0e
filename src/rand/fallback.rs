//! Non-cryptographic fallback generator.
//!
//! Cycle-counter entropy is folded into a rotating state and passed through a
//! SplitMix64 finalizer. Output is uniform enough for sampling but makes no
//! unpredictability claims.

use rand_core::Error;
use zeroize::Zeroize;

use super::{RandomSource, SourceKind};

/// What the fallback reads its entropy from on this target.
#[cfg(target_arch = "x86_64")]
pub const COUNTER: &str = "rdtsc";
#[cfg(target_arch = "aarch64")]
pub const COUNTER: &str = "cntvct_el0";
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const COUNTER: &str = "system clock";

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_counter() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_counter() -> u64 {
    let ticks: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks) }
    ticks
}

// No readable cycle counter: nanoseconds since the epoch, zero if the clock is
// set before it.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_counter() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xd1b5_4a32_d192_ed03,
    0xaef1_7502_108e_f2d9,
    0xdb4f_0b91_75ae_2165,
    0xf135_7aea_2e62_a9c5,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xc2b2_ae3d_27d4_eb4f,
];

const WEYL: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct FallbackSource {
    state: u64,
}

impl FallbackSource {
    #[must_use]
    pub fn new() -> Self {
        Self { state: read_counter() }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let ent = read_counter();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // Weyl step keeps the state moving when the counter reads zero.
        self.state = self
            .state
            .rotate_left(17)
            .wrapping_mul(MULTIPLIERS[idx])
            .wrapping_add(WEYL)
            ^ ent;

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

impl Default for FallbackSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FallbackSource {
    fn try_next_u32(&mut self) -> Result<u32, Error> {
        Ok(self.next_u32())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Fallback
    }
}

impl Drop for FallbackSource {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
