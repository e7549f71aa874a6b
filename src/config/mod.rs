//! Configuration module
//!
//! ```toml
//! [log]
//! path = "shop/welding_log.json"
//! view_limit = 5
//! summary_limit = 10
//!
//! [output]
//! plain = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::assistant::{DEFAULT_SUMMARY_LIMIT, DEFAULT_VIEW_LIMIT};
use crate::core::log_store::DEFAULT_LOG_FILE;

/// Environment variable overriding the session log path
pub const LOG_ENV: &str = "WELD_LOG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Session log file; relative paths resolve against the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default = "default_view_limit")]
    pub view_limit: usize,

    #[serde(default = "default_summary_limit")]
    pub summary_limit: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            view_limit: default_view_limit(),
            summary_limit: default_summary_limit(),
        }
    }
}

fn default_view_limit() -> usize {
    DEFAULT_VIEW_LIMIT
}

fn default_summary_limit() -> usize {
    DEFAULT_SUMMARY_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Strip decorative rules and blank lines from reports
    #[serde(default)]
    pub plain: bool,
}

impl Config {
    /// Load config from default locations, returning the file it came from
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Ok((Self::load_from(&local)?, Some(local)));
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Ok((Self::load_from(&global)?, Some(global)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find local .weld/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(".weld").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Get global config path (~/.weld/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().join(".weld").join("config.toml"))
    }

    /// Session log path with priority:
    /// 1. explicit override (`--log`)
    /// 2. `WELD_LOG` env var
    /// 3. `[log] path` from the config file
    /// 4. `welding_log.json` in the current directory
    pub fn log_path(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }

        if let Ok(env_path) = std::env::var(LOG_ENV) {
            if !env_path.trim().is_empty() {
                return PathBuf::from(env_path);
            }
        }

        self.log
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}
