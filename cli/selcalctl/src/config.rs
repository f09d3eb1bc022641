//! CLI configuration.
//!
//! Resolution order, later wins:
//! - `config.json` in the platform config directory
//! - `SELCAL_LOG_LEVEL` / `SELCAL_FORMAT` environment variables
//! - command-line flags (applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

const ENV_LOG_LEVEL: &str = "SELCAL_LOG_LEVEL";
const ENV_FORMAT: &str = "SELCAL_FORMAT";

/// Get the config directory path.
fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "selcal", "selcal").map(|dirs| dirs.config_dir().to_path_buf())
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format (`table` or `json`).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Apply overrides from an environment-like lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        if let Some(format) = lookup(ENV_FORMAT).filter(|v| !v.is_empty()) {
            self.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.format, "table");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "format": "json" }"#).unwrap();
        assert_eq!(config.format, "json");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::from_json_str(r#"{ "log_level": "info" }"#).unwrap();
        config.apply_overrides(|key| match key {
            "SELCAL_LOG_LEVEL" => Some("debug".to_string()),
            "SELCAL_FORMAT" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.format, "table");
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_from(Path::new("/nonexistent/selcal/config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_contents() {
        assert!(Config::from_json_str("{ not json").is_err());
    }
}
