//! Config path management.
//!
//! Handles determining the config file location across platforms, with
//! support for a CLI override and an environment variable.

use std::path::PathBuf;
use std::sync::OnceLock;

#[cfg(not(test))]
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV_VAR: &str = "FFIR_CONFIG_PATH";

/// Override for the config path, set via --config CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the config path override (called from CLI --config flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

/// Check if the config path was explicitly specified via --config CLI flag.
///
/// An explicit path must exist; the environment variable and the default
/// location may point at nothing, which means "use defaults".
pub fn is_config_path_explicit() -> bool {
    CONFIG_PATH.get().is_some()
}

/// Get the config file path.
///
/// Priority:
/// 1. CLI --config flag (set via `set_config_path`)
/// 2. FFIR_CONFIG_PATH environment variable
/// 3. Platform-specific default location
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    // In test builds, FFIR_CONFIG_PATH must be set to avoid reading the developer's config
    #[cfg(test)]
    panic!("FFIR_CONFIG_PATH not set in test; load config with UserConfig::load_from instead");

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    #[cfg(not(test))]
    {
        let strategy = choose_base_strategy().ok()?;
        Some(strategy.config_dir().join("ffir").join("config.toml"))
    }
}
