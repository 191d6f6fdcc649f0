//! Repository root detection by filesystem markers.
//!
//! Walks ancestor directories looking for any configured marker. The nearest
//! directory that has one wins; within a directory, descriptor order decides.

use std::path::{Path, PathBuf};

use super::{RepositoryRoot, VcsDescriptor, default_descriptors};
use crate::path::{absolutize, home_dir, same_directory};

/// Everything the locator needs, passed in rather than read from the process.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub descriptors: Vec<VcsDescriptor>,
    /// Reject the home directory as a root even when it carries a marker.
    pub avoid_home: bool,
    /// Directory the guard compares against; `None` disables the guard.
    pub home: Option<PathBuf>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            descriptors: default_descriptors(),
            avoid_home: true,
            home: home_dir(),
        }
    }
}

/// Find the checkout enclosing `start`.
///
/// Checks `start` itself, then each parent. At each level the descriptors are
/// tried in order and the first marker that exists (file or directory, so git
/// worktree `.git` files count) decides. Returns `None` when the filesystem
/// root is passed without a match, or when the match is the home directory
/// and `avoid_home` is set.
pub fn locate_repository_root(start: &Path, config: &LocatorConfig) -> Option<RepositoryRoot> {
    let start = match absolutize(start) {
        Ok(path) => path,
        Err(e) => {
            log::debug!("Can't resolve {}: {e}", start.display());
            return None;
        }
    };

    let found = start.ancestors().find_map(|dir| {
        config
            .descriptors
            .iter()
            .find(|d| dir.join(&d.marker).exists())
            .map(|d| RepositoryRoot {
                path: dir.to_path_buf(),
                descriptor: d.clone(),
            })
    });

    let Some(root) = found else {
        log::debug!("No VCS marker above {}", start.display());
        return None;
    };

    if config.avoid_home
        && let Some(home) = &config.home
        && same_directory(&root.path, home)
    {
        log::debug!(
            "Ignoring {} marker in home directory {}",
            root.descriptor.marker,
            home.display()
        );
        return None;
    }

    log::debug!(
        "Found {} root at {}",
        root.descriptor.marker,
        root.path.display()
    );
    Some(root)
}
