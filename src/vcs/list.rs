//! Listing tracked files by shelling out to the VCS tool.

use std::path::Path;

use super::{Separator, VcsDescriptor};
use crate::error::{COMMAND_NOT_FOUND_EXIT, FindError};
use crate::shell_exec::{CommandRunner, ShellConfig};

/// Build the shell command that lists `descriptor`'s files from `root`.
///
/// The root is quoted for the shell that will run the command; the listing
/// command is trusted configuration and is appended as-is.
pub fn list_command(root: &Path, descriptor: &VcsDescriptor) -> String {
    list_command_for(ShellConfig::get(), root, descriptor)
}

fn list_command_for(shell: &ShellConfig, root: &Path, descriptor: &VcsDescriptor) -> String {
    let root = root.to_string_lossy();
    format!("cd {} && {}", shell.quote(&root), descriptor.command)
}

/// Split raw command output into entries, dropping empty ones.
///
/// Empty segments come from trailing or doubled separators. A tool that
/// prints a genuinely empty filename would lose it here too.
pub fn split_entries(output: &[u8], separator: Separator) -> Vec<String> {
    output
        .split(|b| *b == separator.byte())
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}

/// List the files `descriptor`'s tool tracks under `root`.
///
/// Entries are returned in the tool's order, relative to `root`, without
/// normalization or deduplication. A missing tool (exit 127) becomes
/// [`FindError::ToolNotFound`]; other failures pass through from the runner.
pub fn list_tracked_files(
    root: &Path,
    descriptor: &VcsDescriptor,
    runner: &dyn CommandRunner,
) -> Result<Vec<String>, FindError> {
    let command = list_command(root, descriptor);
    let output = runner.run(root, &command).map_err(|err| match err {
        FindError::CommandFailed {
            exit_code: Some(COMMAND_NOT_FOUND_EXIT),
            ..
        } => FindError::ToolNotFound {
            program: descriptor.program().to_string(),
            root: root.to_path_buf(),
        },
        other => other,
    })?;

    let files = split_entries(&output.stdout, descriptor.separator);
    log::debug!("{} lists {} files", descriptor.program(), files.len());
    Ok(files)
}
