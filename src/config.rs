//! Application configuration.
//!
//! Loaded from a TOML file with an `[fdc]` table:
//!
//! ```toml
//! [fdc]
//! api_key = "..."
//! timeout_seconds = 10
//! ```
//!
//! Every field is optional. The `USDA_API_KEY` environment variable fills
//! in the API key when the file does not set one.

use std::path::{Path, PathBuf};

use fdc_search::FdcConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable holding the Data.gov API key.
pub const API_KEY_ENV: &str = "USDA_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// FoodData Central client settings.
    pub fdc: FdcConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `$XDG_CONFIG_HOME/nutrition-profile/config.toml` (or the platform
    /// equivalent).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nutrition-profile").join("config.toml"))
    }

    /// Resolve the configuration used by the binaries.
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// if present, otherwise defaults. The API key from [`API_KEY_ENV`] is
    /// applied afterwards and the result validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed, or if
    /// the resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path().filter(|p| p.is_file()) {
                Some(default) => {
                    tracing::debug!(path = %default.display(), "loading default config");
                    Self::from_file(&default)?
                }
                None => Self::default(),
            },
        };

        let config = config.with_env_api_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Fill the API key from an environment value unless the file set one.
    ///
    /// Empty values are ignored.
    pub fn with_env_api_key(mut self, value: Option<String>) -> Self {
        if self.fdc.api_key.is_none() {
            self.fdc.api_key = value.filter(|key| !key.trim().is_empty());
        }
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.fdc
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
