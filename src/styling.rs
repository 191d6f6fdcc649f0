//! Consolidated styling module for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//! - Semantic style constants for domain-specific use

use anstyle::{AnsiColor, Color, Style};

// ============================================================================
// Re-exports from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Semantic Style Constants
// ============================================================================

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Bold error style, for the subject of an error message
pub const ERROR_BOLD: Style = ERROR.bold();

/// Hint style (dimmed) - use as `{HINT}text{HINT:#}`
pub const HINT: Style = Style::new().dimmed();

/// Bold hint style, for commands and paths inside hints
pub const HINT_BOLD: Style = HINT.bold();

/// Gutter style for quoted content (commands, tool stderr)
pub const GUTTER: Style = Style::new().bg_color(Some(Color::Ansi(AnsiColor::BrightWhite)));

// ============================================================================
// Message Emojis
// ============================================================================

/// Error emoji - use with ERROR style: `eprintln!("{ERROR_EMOJI} {ERROR}message{ERROR:#}");`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji - use with HINT style: `eprintln!("{HINT_EMOJI} {HINT}message{HINT:#}");`
pub const HINT_EMOJI: &str = "💡";

/// Info emoji, for neutral context lines
pub const INFO_EMOJI: &str = "⚪";

/// Quote `content` in a gutter: each line is prefixed with a styled bar.
///
/// Output always ends with a newline so callers can append blocks directly.
pub fn format_with_gutter(content: &str) -> String {
    let mut out = String::new();
    for line in content.lines() {
        out.push_str(&format!("{GUTTER} {GUTTER:#} {line}\n"));
    }
    out
}
