use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "KITCHEN_API_URL";

fn default_api_base_url() -> String {
    "http://localhost:8080/springAI".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base address both endpoints live under
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout; recipe generation is slow
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration once at startup.
    ///
    /// Reads the platform config file when it exists, falls back to defaults
    /// otherwise, then applies the `KITCHEN_API_URL` override. Nothing is
    /// written back.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => {
                tracing::info!("No config file found, using defaults");
                Config::default()
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(&url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    fn apply_api_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::info!("Using {} from environment: {}", API_URL_ENV, url);
            self.api_base_url = url.to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url is empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Platform config file location
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("KitchenWizard").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/springAI");
        assert_eq!(config.request_timeout_secs, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api_base_url": "https://kitchen.example/springAI"}"#)
                .unwrap();
        assert_eq!(config.api_base_url, "https://kitchen.example/springAI");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_api_url_override() {
        let mut config = Config::default();
        config.apply_api_url_override("  ");
        assert_eq!(config.api_base_url, "http://localhost:8080/springAI");

        config.apply_api_url_override(" http://10.0.0.2:9000/springAI ");
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000/springAI");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            api_base_url: String::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::ReadFailed { .. })
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Config::from_file(&broken),
            Err(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn test_from_file_reads_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"api_base_url": "http://kitchen.local/springAI", "request_timeout_secs": 15}"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "http://kitchen.local/springAI");
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_config_file_path() {
        if let Some(path) = Config::config_path() {
            assert!(path.to_string_lossy().contains("KitchenWizard"));
            assert!(path.to_string_lossy().ends_with("config.json"));
        }
    }
}
