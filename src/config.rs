use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/Mostakim0978/D1PT0/main/baseApiUrl.json";
pub const DEFAULT_FALLBACK_API: &str = "https://api.d1pto.xyz";
pub const DEFAULT_COMMAND_NAME: &str = "dl";
pub const DEFAULT_PREFIX: &str = "/";
const DEFAULT_CONFIG_TIMEOUT_SECS: u64 = 10;

/// How long a resolved API base stays valid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RefreshPolicy {
    /// Resolve once and keep it for the life of the resolver.
    #[default]
    Never,
    /// Re-resolve once the cached value is older than `secs`.
    After { secs: u64 },
}

impl RefreshPolicy {
    pub fn is_stale(&self, age: Duration) -> bool {
        match self {
            RefreshPolicy::Never => false,
            RefreshPolicy::After { secs } => age >= Duration::from_secs(*secs),
        }
    }
}

/// Runtime settings for the plugin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub config_url: String,
    pub fallback_api: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    pub config_timeout_secs: u64,
    pub refresh: RefreshPolicy,
    pub scratch_dir: PathBuf,
    pub command_name: String,
    pub prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_url: DEFAULT_CONFIG_URL.to_string(),
            fallback_api: DEFAULT_FALLBACK_API.to_string(),
            api_base: None,
            config_timeout_secs: DEFAULT_CONFIG_TIMEOUT_SECS,
            refresh: RefreshPolicy::Never,
            scratch_dir: std::env::temp_dir().join("ytgrab-cache"),
            command_name: DEFAULT_COMMAND_NAME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn config_timeout(&self) -> Duration {
        Duration::from_secs(self.config_timeout_secs)
    }
}
