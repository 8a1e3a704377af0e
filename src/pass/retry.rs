//! Bounded retry policy.

/// Check a candidate, and while it is rejected, retry up to a fixed limit.
///
/// On exhaustion the last candidate is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempts(u32);

/// Result of [`Attempts::until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Candidate accepted after this many retries.
    Accepted(u32),
    /// Every retry was used and the last candidate still failed the check.
    Exhausted,
}

impl Attempts {
    /// Per-position redraw when avoiding adjacent repeats.
    pub const REDRAW: Self = Self(20);
    /// Whole-password regeneration or reshuffle.
    pub const REGENERATE: Self = Self(100);

    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self(limit)
    }

    #[must_use]
    pub const fn limit(self) -> u32 {
        self.0
    }

    pub fn until<T>(
        self,
        state: &mut T,
        mut retry: impl FnMut(&mut T),
        accept: impl Fn(&T) -> bool,
    ) -> Outcome {
        for used in 0..self.0 {
            if accept(state) {
                return Outcome::Accepted(used);
            }
            retry(state);
        }
        if accept(state) {
            Outcome::Accepted(self.0)
        } else {
            Outcome::Exhausted
        }
    }
}

impl Outcome {
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
