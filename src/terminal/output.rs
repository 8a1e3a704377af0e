//! Terminal output utilities.

use crossterm::style::{Color, Stylize};

pub const BOX_WIDTH: usize = 74;
const METER_CELLS: usize = 20;

/// Check if stdout is a tty.
pub fn is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

// ============================================================================
// Colour
// ============================================================================

/// Bold RGB text, or the plain text when stdout is not a terminal.
pub fn paint(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    if is_tty() {
        text.with(Color::Rgb { r, g, b }).bold().to_string()
    } else {
        text.to_string()
    }
}

/// Horizontal meter filled to `percent`: `█████░░░░░`.
pub fn meter(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * METER_CELLS).div_ceil(100);
    format!("{}{}", "█".repeat(filled), "░".repeat(METER_CELLS - filled))
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing
// ============================================================================

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn width_skips_escapes() {
        assert_eq!(console_width("\x1b[1mHigh\x1b[0m"), 4);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn meter_fill() {
        assert_eq!(meter(0), "░".repeat(20));
        assert_eq!(meter(100), "█".repeat(20));
        assert_eq!(console_width(&meter(50)), 20);
        assert!(meter(25).starts_with("█████░"));
    }
}
