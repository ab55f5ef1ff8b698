use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// Application Configuration
// ============================================================================
//
// Loaded from a TOML file; every section and field falls back to its default.
//
//   [logging]
//   filter = "info,kitchenpos=debug"
//
//   [metrics]
//   enabled = true
//   port = 9090
//
// ============================================================================

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "KITCHENPOS_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,kitchenpos=debug".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 9090,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Read the file named by `KITCHENPOS_CONFIG`, or use defaults when it is unset
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.metrics.port, 9090);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [metrics]
            port = 9191
            "#,
        )
        .unwrap();

        assert_eq!(config.metrics.port, 9191);
        assert!(config.metrics.enabled);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            filter = "warn"

            [metrics]
            enabled = false
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.filter, "warn");
        assert!(!config.metrics.enabled);
        assert_eq!(config.metrics.port, 8080);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = AppConfig::from_toml_str("[metrics]\nport = \"not a number\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = AppConfig::from_file("/nonexistent/kitchenpos.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
