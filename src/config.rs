//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. `.sql-doc-validator.toml` in current directory
//! 3. `~/.config/sql-doc-validator/config.toml`
//! 4. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [checks]
//! disabled = ["SNIP002"]
//!
//! [checks.severity]
//! SNIP001 = "error"    # Promote to error
//! ANCHOR002 = "warning"
//!
//! [render]
//! title = "SQL Tips and Tricks"
//! ```

use std::{collections::HashMap, env, fs, path::PathBuf};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub render: RenderConfig
}

/// Checks configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChecksConfig {
    /// Disabled check IDs
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Severity overrides (check_id -> severity)
    #[serde(default)]
    pub severity: HashMap<String, String>
}

/// Renderer configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RenderConfig {
    /// Site title override; defaults to the document's own title
    pub title: Option<String>
}

impl Config {
    /// Load configuration from files
    ///
    /// Priority (highest to lowest):
    /// 1. Config file in current directory (.sql-doc-validator.toml)
    /// 2. Config file in home directory
    ///    (~/.config/sql-doc-validator/config.toml)
    /// 3. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-doc-validator")
                .join("config.toml");

            if home_config.exists() {
                config = Self::read_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(".sql-doc-validator.toml");
        if local_config.exists() {
            config = Self::read_file(&local_config)?;
        }

        Ok(config)
    }

    fn read_file(path: &PathBuf) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
