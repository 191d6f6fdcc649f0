//! User configuration.
//!
//! Loaded from a TOML file (see [`path`]) and merged with CLI overrides in
//! main.rs. Every field is optional; accessor methods apply defaults, so
//! callers write `config.timeout()` instead of unwrapping.
//!
//! ```toml
//! avoid-home = true
//! timeout = 30
//! chooser = "auto"
//! prompt = "Find file in repository: "
//! editor = "hx"
//!
//! [[vcs]]
//! marker = ".jj"
//! command = "jj file list"
//! separator = "newline"
//! ```

pub mod path;

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FindError;
use crate::path::home_dir;
use crate::vcs::{LocatorConfig, VcsDescriptor, default_descriptors};

pub use path::{get_config_path, is_config_path_explicit, set_config_path};

pub const DEFAULT_PROMPT: &str = "Find file in repository: ";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which chooser presents the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ChooserKind {
    /// skim when attached to a terminal, otherwise the line prompt
    #[default]
    Auto,
    /// Fuzzy full-screen picker
    Skim,
    /// Line-based prompt with substring filtering
    Prompt,
}

/// Contents of the config file. Absent keys fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UserConfig {
    /// Reject `$HOME` as a repository root
    pub avoid_home: Option<bool>,
    /// Seconds a listing command may run; 0 disables the limit
    pub timeout: Option<u64>,
    pub chooser: Option<ChooserKind>,
    pub prompt: Option<String>,
    /// Command used to open the chosen file (falls back to $VISUAL, $EDITOR)
    pub editor: Option<String>,
    /// Use only the `[[vcs]]` entries below, dropping the built-in table
    #[serde(default)]
    pub replace_defaults: bool,
    #[serde(default)]
    pub vcs: Vec<VcsDescriptor>,
}

impl UserConfig {
    /// Load from the resolved config path. A missing file yields defaults
    /// unless the path came from `--config`.
    pub fn load() -> Result<Self, FindError> {
        let Some(path) = get_config_path() else {
            log::debug!("No config directory; using defaults");
            return Ok(Self::default());
        };
        if !path.exists() && !is_config_path_explicit() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from a specific file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, FindError> {
        let config_error = |message: String| FindError::Config {
            path: path.to_path_buf(),
            message,
        };
        let contents = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config: UserConfig =
            toml::from_str(&contents).map_err(|e| config_error(e.to_string()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn avoid_home(&self) -> bool {
        self.avoid_home.unwrap_or(true)
    }

    /// `None` means wait forever.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn chooser(&self) -> ChooserKind {
        self.chooser.unwrap_or_default()
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn editor(&self) -> Option<&str> {
        self.editor.as_deref().filter(|e| !e.trim().is_empty())
    }

    /// User entries first, then built-ins whose marker the user didn't
    /// override (unless `replace-defaults` is set).
    pub fn descriptors(&self) -> Vec<VcsDescriptor> {
        let mut descriptors = self.vcs.clone();
        if !self.replace_defaults {
            descriptors.extend(
                default_descriptors()
                    .into_iter()
                    .filter(|d| !self.vcs.iter().any(|u| u.marker == d.marker)),
            );
        }
        descriptors
    }

    pub fn locator(&self) -> LocatorConfig {
        LocatorConfig {
            descriptors: self.descriptors(),
            avoid_home: self.avoid_home(),
            home: home_dir(),
        }
    }
}
