//! Strength tiers and their display data.

/// One tier on a strength ladder.
#[derive(Debug, PartialEq)]
pub struct StrengthLevel {
    /// Position on the ladder; `0` is reserved for [`NEUTRAL`].
    pub rank: u8,
    pub label: &'static str,
    pub description: &'static str,
    /// RGB colour of the badge and meter.
    pub color: (u8, u8, u8),
    /// Meter fill in percent.
    pub width: u8,
    /// Lowest score that reaches this tier.
    pub threshold: f64,
}

pub static NEUTRAL: StrengthLevel = StrengthLevel {
    rank: 0,
    label: "—",
    description: "Generate a password",
    color: (0x98, 0x98, 0x9d),
    width: 0,
    threshold: 0.0,
};

pub static ENTROPY_LEVELS: [StrengthLevel; 6] = [
    StrengthLevel {
        rank: 1,
        label: "Very low",
        description: "Increase the length and add more character types",
        color: (0xff, 0x45, 0x3a),
        width: 25,
        threshold: 0.0,
    },
    StrengthLevel {
        rank: 2,
        label: "Low",
        description: "Add more character types to improve it",
        color: (0xff, 0x9f, 0x0a),
        width: 35,
        threshold: 30.0,
    },
    StrengthLevel {
        rank: 3,
        label: "Medium",
        description: "Good enough for most services",
        color: (0xff, 0xd6, 0x0a),
        width: 50,
        threshold: 45.0,
    },
    StrengthLevel {
        rank: 4,
        label: "Good",
        description: "Solid protection for important accounts",
        color: (0x30, 0xd1, 0x58),
        width: 65,
        threshold: 60.0,
    },
    StrengthLevel {
        rank: 5,
        label: "High",
        description: "Suitable for banking",
        color: (0x0a, 0x84, 0xff),
        width: 80,
        threshold: 75.0,
    },
    StrengthLevel {
        rank: 6,
        label: "Very high",
        description: "Maximum protection for critical data",
        color: (0xbf, 0x5a, 0xf2),
        width: 95,
        threshold: 90.0,
    },
];

pub static LINEAR_LEVELS: [StrengthLevel; 4] = [
    StrengthLevel {
        rank: 1,
        label: "Weak",
        description: "Short or single-category password",
        color: (0xff, 0x45, 0x3a),
        width: 25,
        threshold: 0.0,
    },
    StrengthLevel {
        rank: 2,
        label: "Fair",
        description: "Acceptable for low-value accounts",
        color: (0xff, 0xd6, 0x0a),
        width: 50,
        threshold: 32.0,
    },
    StrengthLevel {
        rank: 3,
        label: "Strong",
        description: "Good length and variety",
        color: (0x30, 0xd1, 0x58),
        width: 75,
        threshold: 64.0,
    },
    StrengthLevel {
        rank: 4,
        label: "Very strong",
        description: "Long password drawing on every category",
        color: (0xbf, 0x5a, 0xf2),
        width: 95,
        threshold: 96.0,
    },
];

/// Highest tier whose threshold the score reaches.
///
/// Ladders start at threshold 0, and scores below it still map to the first tier.
#[must_use]
pub fn select(ladder: &'static [StrengthLevel], score: f64) -> &'static StrengthLevel {
    ladder
        .iter()
        .rev()
        .find(|level| score >= level.threshold)
        .unwrap_or(&ladder[0])
}
