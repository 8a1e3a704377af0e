use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};

use crate::pass::{CharacterCategory, Coverage};
use crate::strength::Heuristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl From<CategoryArg> for CharacterCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Lower => Self::Lowercase,
            CategoryArg::Upper => Self::Uppercase,
            CategoryArg::Digits => Self::Digits,
            CategoryArg::Symbols => Self::Symbols,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoverageArg {
    Guaranteed,
    BestEffort,
}

impl From<CoverageArg> for Coverage {
    fn from(arg: CoverageArg) -> Self {
        match arg {
            CoverageArg::Guaranteed => Self::Guaranteed,
            CoverageArg::BestEffort => Self::BestEffort,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Entropy,
    Linear,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Entropy => Self::Entropy,
            HeuristicArg::Linear => Self::Linear,
        }
    }
}

/// Generate passwords from selectable character categories.
///
/// Flags override the saved settings for this run; add --save to keep them.
#[derive(Parser, Debug, Default)]
#[command(name = "strongpass", version)]
pub struct CliFlags {
    /// Password length (8-32)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Number of passwords to generate (at least 1)
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub number: Option<usize>,

    /// Character categories to draw from, comma separated
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub categories: Option<Vec<CategoryArg>>,

    /// Drop the symbols category
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out look-alike characters (0 O 1 l I |)
    #[arg(short = 's', long, num_args = 0..=1, default_missing_value = "true")]
    pub exclude_similar: Option<bool>,

    /// Avoid the same character twice in a row
    #[arg(short = 'r', long, num_args = 0..=1, default_missing_value = "true")]
    pub exclude_repeats: Option<bool>,

    /// How every selected category is made to appear
    #[arg(long, value_enum)]
    pub coverage: Option<CoverageArg>,

    /// Strength scoring heuristic
    #[arg(long, value_enum)]
    pub heuristic: Option<HeuristicArg>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Only print passwords; no summary or warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the effective character pool in the summary
    #[arg(long)]
    pub pool: bool,

    /// Save the resulting settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Restore and save the default settings before generating
    #[arg(long)]
    pub reset: bool,
}
