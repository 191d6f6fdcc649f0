//! Error types and formatting
//!
//! **`FindError`** is a typed enum for domain errors that can be pattern-matched
//! and tested. Use `.into()` to convert to `anyhow::Error` while preserving the
//! type for pattern matching and styled display in main.rs.
//!
//! ```ignore
//! return Err(FindError::NotInRepository { start: dir.into() }.into());
//!
//! if let Some(FindError::ToolNotFound { program, .. }) = err.downcast_ref() {
//!     println!("{program} is missing");
//! }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::path::format_path_for_display;
use crate::styling::{
    ERROR, ERROR_BOLD, ERROR_EMOJI, HINT, HINT_BOLD, HINT_EMOJI, INFO_EMOJI, format_with_gutter,
};

/// Exit status `sh` reports when the command word can't be found.
pub const COMMAND_NOT_FOUND_EXIT: i32 = 127;

/// Domain errors for repository detection and file listing.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// No VCS marker in any ancestor of the start directory
    #[error("not inside a repository: {}", start.display())]
    NotInRepository { start: PathBuf },

    /// A marker was found but the VCS tool isn't installed
    #[error("'{program}' not found (needed to list files in {})", root.display())]
    ToolNotFound { program: String, root: PathBuf },

    /// The listing command exited unsuccessfully
    #[error("'{command}' failed in {}", root.display())]
    CommandFailed {
        command: String,
        root: PathBuf,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The listing command outlived the configured timeout
    #[error("'{command}' timed out after {}s", timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    /// The shell itself couldn't be spawned or waited on
    #[error("failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file couldn't be read or parsed
    #[error("invalid config at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl FindError {
    /// Render the error for a terminal: emoji, colour, gutter for tool output,
    /// and a hint where one helps.
    pub fn styled(&self) -> String {
        match self {
            FindError::NotInRepository { start } => {
                let start = format_path_for_display(start);
                format!(
                    "{ERROR_EMOJI} {ERROR}No repository found above {ERROR_BOLD}{start}{ERROR_BOLD:#}{ERROR:#}\n\n{HINT_EMOJI} {HINT}Checked for the markers in the [[vcs]] table; run with {HINT_BOLD}-vv{HINT_BOLD:#}{HINT} to see each directory{HINT:#}"
                )
            }

            FindError::ToolNotFound { program, root } => {
                let root = format_path_for_display(root);
                format!(
                    "{ERROR_EMOJI} {ERROR}{ERROR_BOLD}{program}{ERROR_BOLD:#}{ERROR} is not installed, but {root} looks like its repository{ERROR:#}\n\n{HINT_EMOJI} {HINT}Install {program}, or override the marker's command in the config file{HINT:#}"
                )
            }

            FindError::CommandFailed {
                command,
                root,
                exit_code,
                stderr,
            } => {
                let root = format_path_for_display(root);
                let status = exit_code
                    .map(|c| format!(" (exit {c})"))
                    .unwrap_or_default();
                let header = format!(
                    "{ERROR_EMOJI} {ERROR}Listing files failed in {ERROR_BOLD}{root}{ERROR_BOLD:#}{ERROR}{status}{ERROR:#}"
                );
                let mut msg = format_error_block(header, stderr);
                msg.push_str("\n\n");
                msg.push_str(INFO_EMOJI);
                msg.push_str(" Ran command:\n");
                msg.push_str(format_with_gutter(command).trim_end());
                msg
            }

            FindError::Timeout { command, timeout } => {
                format!(
                    "{ERROR_EMOJI} {ERROR}{ERROR_BOLD}{command}{ERROR_BOLD:#}{ERROR} did not finish within {}s{ERROR:#}\n\n{HINT_EMOJI} {HINT}Raise the limit with {HINT_BOLD}--timeout{HINT_BOLD:#}{HINT} or {HINT_BOLD}timeout = ...{HINT_BOLD:#}{HINT} in the config; 0 disables it{HINT:#}",
                    timeout.as_secs()
                )
            }

            FindError::Spawn { command, source } => {
                let header =
                    format!("{ERROR_EMOJI} {ERROR}Failed to run {ERROR_BOLD}{command}{ERROR_BOLD:#}{ERROR:#}");
                format_error_block(header, &source.to_string())
            }

            FindError::Config { path, message } => {
                let path = format_path_for_display(path);
                let header = format!(
                    "{ERROR_EMOJI} {ERROR}Invalid config at {ERROR_BOLD}{path}{ERROR_BOLD:#}{ERROR:#}"
                );
                format_error_block(header, message)
            }
        }
    }
}

/// Format an error with header and gutter content
fn format_error_block(header: String, error: &str) -> String {
    let trimmed = error.trim();
    if trimmed.is_empty() {
        header
    } else {
        format!("{header}\n{}", format_with_gutter(trimmed).trim_end())
    }
}
