//! Centralized path definitions for keymatch
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! └── .keymatch.toml            # Per-project config (optional)
//!
//! ~/.keymatch/
//! └── config.toml               # User-level config (optional)
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".keymatch.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".keymatch";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the global keymatch directory.
///
/// Returns `~/.keymatch/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.keymatch/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
