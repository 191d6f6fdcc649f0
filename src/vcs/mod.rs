//! Version-control descriptors, root detection, and tracked-file listing.
//!
//! A [`VcsDescriptor`] names a marker entry (`.git`, `.hg`, ...) and the shell
//! command that prints the checkout's tracked files. Use
//! [`locate_repository_root`] to find the nearest enclosing checkout and
//! [`list_tracked_files`] to ask its tool what it tracks.

pub(crate) mod detect;
pub(crate) mod list;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use detect::{LocatorConfig, locate_repository_root};
pub use list::{list_command, list_tracked_files, split_entries};

/// How a listing command separates its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `\0`, as printed by `-z` / `-0` flags
    #[serde(alias = "null")]
    Nul,
    /// `\n`
    Newline,
}

impl Separator {
    pub fn byte(self) -> u8 {
        match self {
            Separator::Nul => b'\0',
            Separator::Newline => b'\n',
        }
    }
}

/// One VCS: the marker that identifies a checkout root and how to list it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsDescriptor {
    /// File or directory name whose presence marks the root (e.g. `.git`)
    pub marker: String,
    /// Shell command printing tracked files relative to the root
    pub command: String,
    pub separator: Separator,
}

impl VcsDescriptor {
    pub fn new(marker: &str, command: &str, separator: Separator) -> Self {
        Self {
            marker: marker.to_string(),
            command: command.to_string(),
            separator,
        }
    }

    /// First word of the listing command, used to name a missing tool.
    pub fn program(&self) -> &str {
        self.command.split_whitespace().next().unwrap_or(&self.command)
    }
}

/// The built-in descriptor table, in lookup order.
pub fn default_descriptors() -> Vec<VcsDescriptor> {
    vec![
        VcsDescriptor::new(".git", "git ls-files -z", Separator::Nul),
        VcsDescriptor::new(".hg", "hg locate -0", Separator::Nul),
        VcsDescriptor::new("_darcs", "darcs show files -0", Separator::Nul),
        VcsDescriptor::new(".bzr", "bzr ls --versioned -0", Separator::Nul),
        VcsDescriptor::new("_MTN", "mtn list known", Separator::Newline),
        VcsDescriptor::new(".svn", "svn list", Separator::Newline),
    ]
}

/// A detected checkout: its root directory and the descriptor that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRoot {
    pub path: PathBuf,
    pub descriptor: VcsDescriptor,
}
