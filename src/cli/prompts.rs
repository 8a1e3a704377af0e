//! Centralized warning and status messages for CLI output.

use super::quiet;
use crate::terminal::format_number;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn weak_source(source: &str) {
    warn(&format!(
        "Warning: OS random source unavailable, passwords drawn from non-cryptographic {source}"
    ));
}

/// Suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {} PASSWORD(S) COPIED TO CLIPBOARD ***", format_number(count));
    }
}

/// Clipboard failure; passwords are printed instead. NOT suppressed.
pub fn clipboard_error(err: &str) {
    eprintln!("{YELLOW}Clipboard error: {err} (printing instead){RESET}");
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
