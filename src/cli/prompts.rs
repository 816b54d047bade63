//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;
use rulepass::Violation;

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Best-effort password printed despite failed rules.
pub fn constraints_unmet(violations: &[Violation]) {
    warn("Warning: could not generate a password meeting all criteria. Try relaxing some constraints.");
    for violation in violations {
        warn(&format!("  - {violation}"));
    }
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &Path) {
    if !quiet::enabled() {
        let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        println!("{count} password(s) \u{2192} {}", full_path.display());
    }
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        eprintln!("Settings saved to {}", path.display());
    }
}
