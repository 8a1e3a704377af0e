//! CLI context - bundles settings and flags.

use std::io::Write;
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet, report};
use crate::pass::{CharacterCategory, Generated, PasswordEngine};
use crate::settings::Settings;
use crate::strength::StrengthEstimator;
use crate::terminal;

pub type ClipboardError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] crate::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    settings_path: PathBuf,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self::with_settings_path(flags, Settings::path())
    }

    /// Load saved settings from `path`; unreadable files fall back to defaults.
    pub fn with_settings_path(flags: CliFlags, path: PathBuf) -> Self {
        quiet::set(flags.quiet);

        let mut settings = if flags.reset {
            Settings::default()
        } else {
            Settings::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring settings at {}: {e}", path.display());
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        if settings.number_of_passwords == 0 {
            prompts::warn("Saved number_of_passwords is 0; generating 1");
            settings.number_of_passwords = 1;
        }

        let mut context = Self {
            settings,
            flags,
            settings_path: path,
        };
        context.apply_flags();
        context
    }

    /// Generate, persist if asked, and print or copy the result.
    pub fn run(&self) -> Result<(), CliError> {
        let mut engine = PasswordEngine::new();
        let batch = {
            let stdout = std::io::stdout();
            self.run_with(&mut engine, &mut stdout.lock(), &mut SystemClipboard)?
        };

        if !quiet::enabled() && terminal::is_tty() {
            println!();
            report::draw(&batch, &self.estimator(), self.flags.pool);
        }
        Ok(())
    }

    /// [`Context::run`] against an explicit engine, output and clipboard.
    ///
    /// Warns when any password in the batch came from the fallback source.
    pub fn run_with(
        &self,
        engine: &mut PasswordEngine,
        out: &mut impl Write,
        clipboard: &mut impl Clipboard,
    ) -> Result<Vec<Generated>, CliError> {
        let batch = self.generate_with(engine)?;

        if let Some(source) = report::downgraded(&batch) {
            prompts::weak_source(source.describe());
        }

        self.persist();
        self.output(&batch, out, clipboard)?;
        Ok(batch)
    }

    /// Generate the configured number of passwords.
    ///
    /// Nothing is produced if any call fails.
    pub fn generate_with(&self, engine: &mut PasswordEngine) -> Result<Vec<Generated>, CliError> {
        let batch = (0..self.settings.number_of_passwords)
            .map(|_| engine.generate(&self.settings.generation))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(batch)
    }

    #[must_use]
    pub fn estimator(&self) -> StrengthEstimator {
        StrengthEstimator::new(self.settings.heuristic)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let generation = &mut self.settings.generation;

        if let Some(length) = self.flags.length {
            generation.length = length;
        }
        if let Some(ref categories) = self.flags.categories {
            generation.categories = categories.iter().copied().map(CharacterCategory::from).collect();
        }
        if self.flags.no_symbols {
            generation.categories.remove(&CharacterCategory::Symbols);
        }
        if let Some(exclude) = self.flags.exclude_similar {
            generation.exclude_similar = exclude;
        }
        if let Some(exclude) = self.flags.exclude_repeats {
            generation.exclude_repeats = exclude;
        }
        if let Some(coverage) = self.flags.coverage {
            generation.coverage = coverage.into();
        }

        if let Some(heuristic) = self.flags.heuristic {
            self.settings.heuristic = heuristic.into();
        }
        if let Some(number) = self.flags.number {
            self.settings.number_of_passwords = number;
        }
        if self.flags.board {
            self.settings.to_clipboard = true;
        }
    }

    fn persist(&self) {
        if !(self.flags.save || self.flags.reset) {
            return;
        }
        match self.settings.save_to(&self.settings_path) {
            Ok(()) => prompts::settings_saved(&self.settings_path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    /// Copy to the clipboard when asked; print to `out` otherwise or when
    /// the copy failed.
    fn output(
        &self,
        batch: &[Generated],
        out: &mut impl Write,
        clipboard: &mut impl Clipboard,
    ) -> Result<(), CliError> {
        let copied = self.settings.to_clipboard && copy_to_clipboard(batch, clipboard);

        if !copied {
            for generated in batch {
                out.write_all(generated.password.as_str().as_bytes())?;
                out.write_all(b"\n")?;
            }
            out.flush()?;
        }
        Ok(())
    }
}

/// Destination for `--board`.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, via copypasta.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx = ClipboardContext::new()?;
        ctx.set_contents(text.to_owned())?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// Copy all passwords, one per line. Returns false when the clipboard failed,
/// in which case the caller still has the passwords to print.
fn copy_to_clipboard(batch: &[Generated], clipboard: &mut impl Clipboard) -> bool {
    let mut passwords = batch
        .iter()
        .map(|generated| generated.password.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let result = clipboard.copy(&passwords);
    passwords.zeroize();

    match result {
        Ok(()) => {
            prompts::clipboard_copied(batch.len());
            true
        }
        Err(e) => {
            log::warn!("clipboard write failed: {e}");
            prompts::clipboard_error(&e.to_string());
            false
        }
    }
}
