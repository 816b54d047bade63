//! Terminal output utilities.
//!
//! Box drawing for the summary shown after a single password.

use crossterm::style::Stylize;
use rulepass::{Analysis, Strength};

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

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

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
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

// ============================================================================
// Summary
// ============================================================================

pub struct Summary<'a> {
    pub strength: Strength,
    pub analysis: Analysis,
    pub entropy: f64,
    pub charset: usize,
    pub attempts: usize,
    pub source: &'a str,
}

/// Strength, entropy, analysis and attempt count for a single password.
pub fn print_summary(summary: &Summary<'_>) {
    let label = summary.strength.to_string();
    let strength = match summary.strength {
        Strength::Weak => label.red(),
        Strength::Fair => label.yellow(),
        _ => label.green(),
    };

    println!();
    box_top("Strength");
    box_line(&format!("{} • {:.1} bits", strength, summary.entropy));
    box_line(&format!(
        "Charset: {} chars • Attempts: {} • Source: {}",
        summary.charset, summary.attempts, summary.source
    ));
    box_bottom();

    let a = &summary.analysis;
    box_top("Analysis");
    box_line(&format!(
        "Length: {} • Upper: {} • Lower: {} • Numbers: {} • Symbols: {}",
        a.length, a.uppercase, a.lowercase, a.digits, a.symbols
    ));
    box_line(&format!(
        "Unique: {} • Entropy: {:.0} bits • Time to crack: {}",
        a.unique, a.entropy, a.crack_time
    ));
    box_bottom();
}
