//! Verifier configuration
//!
//! Stored as TOML in ~/.piece-verifier/config.toml. A missing file yields
//! the defaults; unknown keys are rejected.

use crate::core::error::{Result, VerifierError};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the configuration file
const CONFIG_DIR: &str = ".piece-verifier";

/// Runtime settings for the verifier front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Verify aggregation entries in parallel
    pub parallel: bool,
    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            log_filter: "info".to_string(),
        }
    }
}

impl VerifierConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            VerifierError::configuration(format!("Failed to parse verifier config: {}", e))
        })
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            VerifierError::configuration(format!("Failed to serialize verifier config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the default configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(VerifierError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(CONFIG_DIR).join("config.toml"))
    }
}
