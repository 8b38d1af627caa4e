//! Color theming for shell output.
//!
//! Respects the `NO_COLOR` environment variable and falls back to plain
//! text when stdout is not a terminal.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;

static COLORS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Detect color support. Call once at startup before any themed output.
pub fn init() {
    let enabled = std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal();
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
}

fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Format text as an error (red).
pub fn error(text: &str) -> String {
    if colors_enabled() {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

/// Format text as a warning (yellow).
pub fn warning(text: &str) -> String {
    if colors_enabled() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// Format text as success (green).
pub fn success(text: &str) -> String {
    if colors_enabled() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

/// Format text as a prompt (blue, bold).
pub fn prompt(text: &str) -> String {
    if colors_enabled() {
        text.blue().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Format text as dim/secondary (dark grey).
pub fn dim(text: &str) -> String {
    if colors_enabled() {
        text.dark_grey().to_string()
    } else {
        text.to_string()
    }
}
