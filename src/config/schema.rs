//! Configuration schema for the Lenjoy client.
//!
//! This module defines the configuration structure and validation logic for
//! all user-configurable client settings.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API base URL when no explicit
/// setting is provided.
pub const BASE_URL_ENV_VAR: &str = "LENJOY_API_BASE_URL";

/// Main configuration structure for the Lenjoy client.
///
/// Settings are supplied under the `"lenjoy"` key of a JSON settings value.
/// Missing or invalid settings fall back to sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the API server, without the `/api` root prefix.
    ///
    /// Resolution order: explicit setting, then the `LENJOY_API_BASE_URL`
    /// environment variable, then `http://localhost:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    ///
    /// Maximum time to wait for a complete response (including connection,
    /// headers, and body download). Defaults to 30000ms (30 seconds).
    ///
    /// Must be greater than 0.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Maximum number of keywords to keep in local search history.
    ///
    /// Older keywords beyond this limit are evicted on insert. Defaults
    /// to 10.
    ///
    /// Must be > 0.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            history_limit: default_history_limit(),
        }
    }
}

impl ClientConfig {
    /// Validates the configuration and returns errors if any settings are invalid.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("baseUrl must not be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if self.history_limit == 0 {
            return Err("historyLimit must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout)
    }

    /// Merges this configuration with another, using values from `other`.
    ///
    /// This is useful for applying user settings on top of defaults: fields
    /// absent from the user JSON already carry their serde defaults.
    ///
    /// # Arguments
    ///
    /// * `other` - Configuration to merge with (takes precedence)
    pub fn merge(&self, other: &ClientConfig) -> Self {
        Self {
            base_url: other.base_url.clone(),
            timeout: other.timeout,
            history_limit: other.history_limit,
        }
    }
}

// Default value functions for serde

fn default_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn default_timeout() -> u64 {
    30000 // 30 seconds in milliseconds
}

fn default_history_limit() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_config() {
        std::env::remove_var(BASE_URL_ENV_VAR);
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, 30000);
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    #[serial]
    fn test_base_url_from_environment() {
        std::env::set_var(BASE_URL_ENV_VAR, "https://api.lenjoy.example");
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.lenjoy.example");
        std::env::remove_var(BASE_URL_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_config_validation_valid() {
        std::env::remove_var(BASE_URL_ENV_VAR);
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let config = ClientConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.validate().unwrap_err(), "baseUrl must not be empty");
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = ClientConfig {
            timeout: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(
            config.validate().unwrap_err(),
            "timeout must be greater than 0"
        );
    }

    #[test]
    fn test_config_validation_zero_history_limit() {
        let config = ClientConfig {
            history_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(
            config.validate().unwrap_err(),
            "historyLimit must be greater than 0"
        );
    }

    #[test]
    fn test_timeout_duration() {
        let config = ClientConfig {
            timeout: 5000,
            ..Default::default()
        };
        assert_eq!(
            config.timeout_duration(),
            std::time::Duration::from_millis(5000)
        );
    }

    #[test]
    #[serial]
    fn test_merge_config() {
        std::env::remove_var(BASE_URL_ENV_VAR);
        let base = ClientConfig::default();
        let custom = ClientConfig {
            base_url: "https://cdn.lenjoy.example".to_string(),
            timeout: 60000,
            history_limit: 5,
        };

        let merged = base.merge(&custom);
        assert_eq!(merged.base_url, "https://cdn.lenjoy.example");
        assert_eq!(merged.timeout, 60000);
        assert_eq!(merged.history_limit, 5);
    }

    #[test]
    #[serial]
    fn test_deserialization_with_defaults() {
        std::env::remove_var(BASE_URL_ENV_VAR);
        let json = r#"{
            "timeout": 60000
        }"#;

        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout, 60000);
        // Other fields should have defaults
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_serialization() {
        let config = ClientConfig {
            base_url: "http://localhost:8000".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("baseUrl"));
        assert!(json.contains("historyLimit"));
        assert!(json.contains("30000"));
    }
}
