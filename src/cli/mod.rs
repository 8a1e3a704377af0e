//! Command-line front end: flags, saved settings, output, clipboard.

mod context;
mod flags;
pub mod prompts;
mod quiet;
mod report;

pub use context::{CliError, Clipboard, ClipboardError, Context, SystemClipboard};
pub use flags::{CategoryArg, CliFlags, CoverageArg, HeuristicArg};
pub use report::{downgraded, weakest};

/// Run CLI with parsed flags.
pub fn run(flags: CliFlags) -> Result<(), CliError> {
    Context::new(flags).run()
}
