pub(crate) mod find;
pub(crate) mod open;

use std::io::Write;
use std::path::Path;

use ffir::FindError;
use ffir::path::absolutize;
use ffir::shell_exec::CommandRunner;
use ffir::vcs::{LocatorConfig, RepositoryRoot, list_tracked_files, locate_repository_root};

pub use find::{FindContext, Outcome, find_file_in_repository};

fn require_root(start: &Path, locator: &LocatorConfig) -> anyhow::Result<RepositoryRoot> {
    let start = absolutize(start)?;
    locate_repository_root(&start, locator).ok_or_else(|| FindError::NotInRepository { start }.into())
}

/// `ffir root`: print the root directory and the marker that identified it.
pub fn handle_root(start: &Path, locator: &LocatorConfig) -> anyhow::Result<()> {
    let root = require_root(start, locator)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{}\t{}",
        root.path.display(),
        root.descriptor.marker
    )?;
    Ok(())
}

/// `ffir list`: print tracked files, one per line or NUL-terminated.
pub fn handle_list(
    start: &Path,
    locator: &LocatorConfig,
    runner: &dyn CommandRunner,
    nul: bool,
) -> anyhow::Result<()> {
    let root = require_root(start, locator)?;
    let files = list_tracked_files(&root.path, &root.descriptor, runner)?;

    let terminator = if nul { '\0' } else { '\n' };
    let mut stdout = std::io::BufWriter::new(std::io::stdout().lock());
    for file in &files {
        write!(stdout, "{file}{terminator}")?;
    }
    stdout.flush()?;
    Ok(())
}
