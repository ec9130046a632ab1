//! Client configuration stored as config.yaml in ~/.profilez

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API base, e.g. `http://localhost:8080/api/v1`
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// `~/.profilez`, or `./.profilez` when there is no home directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Load from the default directory and apply the environment override.
    ///
    /// A broken config file is not fatal: it is logged and defaults are used.
    pub fn load() -> Self {
        let dir = Self::config_dir();
        let config = match Self::load_from(&dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, dir = %dir.display(), "Invalid config, using defaults");
                Config::default()
            }
        };
        config.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Read `config.yaml` from `dir`; a missing file yields the defaults
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Replace the base URL when an override is present and non-blank
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "base_url: http://api.internal:9000/api/v1\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://api.internal:9000/api/v1");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "request_timeout_secs: [1, 2").unwrap();
        assert!(Config::load_from(dir.path()).is_err());
    }

    #[test]
    fn test_env_override() {
        let config = Config::default().with_base_url_override(Some("http://other/api".into()));
        assert_eq!(config.base_url, "http://other/api");

        let config = Config::default().with_base_url_override(Some("   ".into()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = Config::default().with_base_url_override(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
