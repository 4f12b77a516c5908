// Bridge configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "config-file")]
use std::path::Path;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for the platform version bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Platform name to report instead of the detected one
    pub platform_name: Option<String>,

    /// Log calls to unknown methods at warn level (debug otherwise)
    pub log_unhandled_calls: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            platform_name: None,
            log_unhandled_calls: true,
        }
    }
}

impl BridgeConfig {
    /// Check that the configuration can be used as-is
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(name) = &self.platform_name {
            if name.is_empty() {
                return Err(ConfigError::Invalid("platform_name must not be empty".to_string()));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "platform_name must not contain whitespace: {:?}",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate configuration from a TOML string
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    #[cfg(feature = "config-file")]
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "config-file")]
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded bridge configuration from {}", path.display());
        Self::from_toml_str(&content)
    }
}
