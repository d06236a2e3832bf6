//! Configuration management for the Lenjoy client.
//!
//! This module provides configuration loading, validation, and access through
//! a singleton pattern. Configuration is read from a JSON settings value under
//! the "lenjoy" key and merged with defaults; the base URL can also come from
//! the `LENJOY_API_BASE_URL` environment variable.

pub mod schema;

pub use schema::{ClientConfig, BASE_URL_ENV_VAR};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Global configuration instance.
///
/// Lazily initialized on first access and updated when settings change.
static CONFIG: Lazy<RwLock<ClientConfig>> = Lazy::new(|| RwLock::new(ClientConfig::default()));

/// Loads configuration from a JSON settings value.
///
/// Reads the "lenjoy" settings key, merges it with defaults, validates the
/// result, and updates the global configuration.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing user settings under the "lenjoy" key
///
/// # Returns
///
/// `Ok(ClientConfig)` with the loaded configuration, or `Err` if validation fails.
///
/// # Example
///
/// ```no_run
/// use lenjoy_client::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "lenjoy": {
///         "baseUrl": "https://api.lenjoy.example",
///         "timeout": 60000
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 60000);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<ClientConfig, String> {
    let mut config = ClientConfig::default();

    if let Some(settings) = settings_json {
        if let Some(lenjoy_settings) = settings.get("lenjoy") {
            match serde_json::from_value::<ClientConfig>(lenjoy_settings.clone()) {
                Ok(user_config) => {
                    // User settings take precedence over defaults
                    config = config.merge(&user_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse lenjoy settings: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}. Using defaults.", e))?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Gets the current global configuration.
///
/// Singleton accessor returning a clone of the current configuration. If no
/// configuration has been loaded yet, returns the defaults.
pub fn get_config() -> ClientConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| ClientConfig::default())
}

/// Updates a specific configuration setting.
///
/// Allows granular updates without replacing the entire config object.
///
/// # Example
///
/// ```no_run
/// use lenjoy_client::config::update_config;
///
/// update_config(|config| {
///     config.timeout = 60000;
/// });
/// ```
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut ClientConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        // Validate after update
        if let Err(e) = config.validate() {
            eprintln!(
                "Warning: Configuration validation failed after update: {}",
                e
            );
            // Revert to defaults if validation fails
            *config = ClientConfig::default();
        }
    }
}

/// Resets the configuration to defaults.
///
/// Useful for testing or when the user wants to clear custom settings.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = ClientConfig::default();
    }
}
