//! Configuration management
//!
//! Settings come from the first file found among an explicit `--config`
//! path, `./.keymatch.toml` and `~/.keymatch/config.toml`, falling back to
//! built-in defaults. `KEYMATCH_SERVER_URL` overrides the server URL from
//! any file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Service used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "https://svr-chatapp.gleeze.com";

/// Environment variable overriding `server.url`
pub const ENV_SERVER_URL: &str = "KEYMATCH_SERVER_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// keymatch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote service settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Where artifacts are written
    #[serde(default)]
    pub output: OutputConfig,
    /// Values pre-filled into a session
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Remote service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Service root, without the `/app/...` suffix
    #[serde(default = "default_server_url")]
    pub url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Artifact output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory result files are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Session defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Application name used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

impl Config {
    /// Load from `explicit`, or the first config file found, or defaults
    ///
    /// An explicit path must exist and parse. Discovered files that fail to
    /// parse are an error too; only missing files fall through.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => Self::discover()?,
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a single config file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {e}", path.display()))?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("parsing {}: {e}", path.display()))
    }

    /// Parse config text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write to `path` as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The file [`Self::load`] would read without an explicit path
    #[must_use]
    pub fn discovered_path() -> Option<PathBuf> {
        [paths::project_config(), paths::global_config()].into_iter().find(|p| p.exists())
    }

    fn discover() -> anyhow::Result<Self> {
        match Self::discovered_path() {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::load_from(&path)
            },
            None => Ok(Self::default()),
        }
    }

    fn apply_env(&mut self) {
        if let Some(url) = std::env::var(ENV_SERVER_URL)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
        {
            self.server.url = url;
        }
    }
}
