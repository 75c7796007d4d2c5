//! Service configuration file support.
//!
//! Reads server and computation defaults from a TOML configuration file,
//! with environment-variable overrides applied by the server binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("No hemolink.toml found in standard locations")]
    NotFound,
}

/// Service configuration loaded from `hemolink.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub proximity: ProximitySettings,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Forecast defaults applied when a request omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSettings {
    #[serde(default = "default_horizon")]
    pub default_horizon: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            default_horizon: default_horizon(),
        }
    }
}

/// Proximity-ranking defaults applied when a request omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximitySettings {
    #[serde(default = "default_k")]
    pub default_k: usize,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self {
            default_k: default_k(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_horizon() -> usize {
    crate::services::DEFAULT_HORIZON
}

fn default_k() -> usize {
    crate::services::DEFAULT_K
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Honors the `HEMOLINK_CONFIG` environment variable first, then
    /// searches for `hemolink.toml` next to the working directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("HEMOLINK_CONFIG") {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("hemolink.toml"),
            PathBuf::from("config/hemolink.toml"),
            PathBuf::from("../hemolink.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Load from the default locations, falling back to built-in defaults
    /// when no file exists.
    pub fn load_or_default() -> Self {
        match Self::from_default_location() {
            Ok(config) => config,
            Err(ConfigError::NotFound) => Self::default(),
            Err(err) => {
                tracing::warn!("Ignoring unreadable config file: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.forecast.default_horizon, 7);
        assert_eq!(config.proximity.default_k, 3);
    }

    #[test]
    fn test_parse_partial_file() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [forecast]
            default_horizon = 14
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.forecast.default_horizon, 14);
        assert_eq!(config.proximity.default_k, 3);
    }

    #[test]
    fn test_parse_empty_file() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }
}
