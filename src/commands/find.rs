//! Find a file in the enclosing repository, or fall back to opening by path.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ffir::path::{absolutize, format_path_for_display, resolve_typed_path};
use ffir::shell_exec::CommandRunner;
use ffir::vcs::{LocatorConfig, list_tracked_files, locate_repository_root};

use super::open::Opener;
use crate::picker::Chooser;

/// Prompt for the open-by-path fallback.
pub const FALLBACK_PROMPT: &str = "Find file: ";

/// Collaborators for one lookup, chosen by the caller.
pub struct FindContext<'a> {
    pub locator: &'a LocatorConfig,
    pub runner: &'a dyn CommandRunner,
    pub chooser: &'a dyn Chooser,
    pub opener: &'a dyn Opener,
    pub prompt: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened(PathBuf),
    Cancelled,
}

/// Locate the repository around `start`, let the user pick one of its tracked
/// files, and open it. Outside a repository, or when the tool lists nothing,
/// ask for a path relative to `start` instead.
pub fn find_file_in_repository(start: &Path, ctx: &FindContext<'_>) -> anyhow::Result<Outcome> {
    let start = absolutize(start).context("Failed to resolve the starting directory")?;

    let Some(root) = locate_repository_root(&start, ctx.locator) else {
        log::info!(
            "No repository above {}; opening by path",
            format_path_for_display(&start)
        );
        return open_by_path(&start, ctx);
    };

    let files = list_tracked_files(&root.path, &root.descriptor, ctx.runner)?;
    if files.is_empty() {
        log::warn!(
            "{} lists no files in {}; opening by path",
            root.descriptor.program(),
            format_path_for_display(&root.path)
        );
        return open_by_path(&start, ctx);
    }

    let Some(choice) = ctx.chooser.select(ctx.prompt, &files)? else {
        return Ok(Outcome::Cancelled);
    };

    let path = root.path.join(&choice);
    ctx.opener.open(&path)?;
    Ok(Outcome::Opened(path))
}

fn open_by_path(start: &Path, ctx: &FindContext<'_>) -> anyhow::Result<Outcome> {
    let Some(input) = ctx.chooser.read_path(FALLBACK_PROMPT, start)? else {
        return Ok(Outcome::Cancelled);
    };
    let path = resolve_typed_path(&input, start);
    ctx.opener.open(&path)?;
    Ok(Outcome::Opened(path))
}
