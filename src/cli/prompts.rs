//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::Strength;
use crate::terminal::{RED, RESET, YELLOW, tier_color};

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

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize, sink: &str) {
    if !quiet::enabled() {
        eprintln!("*** {count} password(s) copied to {sink} clipboard ***");
    }
}

/// Print clipboard error - NOT suppressed
pub fn clipboard_error(err: &str) {
    eprintln!("{RED}Clipboard error: {err}{RESET}");
}

/// Prompt user when no clipboard works. Returns true to print to the terminal instead.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true;
    }

    eprintln!("Aborted.");
    false
}

/// Entropy summary printed once before per-password strength lines.
pub fn entropy_summary(bits: f64, pool: usize) {
    if !quiet::enabled() {
        eprintln!("Entropy: {bits:.1} bits per password ({pool} char pool)");
    }
}

/// One strength line per generated password, numbered from 1.
pub fn strength_report(index: usize, strength: &Strength) {
    if !quiet::enabled() {
        eprintln!(
            "#{index}: {}{strength}{RESET}",
            tier_color(strength.tier())
        );
    }
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Settings saved.");
    }
}
