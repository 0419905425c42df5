//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.wink/config.toml` (global user preferences)
//! 3. **Project config** - `./.wink/config.toml` (per-directory overrides)

use std::fs;
use std::path::Path;

use crate::config::types::{AccessibilityConfig, FilterConfig, WinkConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &ConfigError) -> bool {
    let ConfigError::ReadFailed { message, .. } = e else {
        return false;
    };
    message.contains("No such file or directory") || message.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.wink/config.toml`)
/// 3. Project config (`./.wink/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<WinkConfig, ConfigError> {
    let mut config = WinkConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(&e) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(&e) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.wink/config.toml.
fn load_user_config() -> Result<WinkConfig, ConfigError> {
    let home_dir = dirs::home_dir().ok_or_else(|| ConfigError::ReadFailed {
        path: "~/.wink/config.toml".to_string(),
        message: "could not determine home directory".to_string(),
    })?;
    let config_path = home_dir.join(".wink").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.wink/config.toml.
fn load_project_config() -> Result<WinkConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadFailed {
        path: "./.wink/config.toml".to_string(),
        message: e.to_string(),
    })?;
    let config_path = cwd.join(".wink").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<WinkConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let config: WinkConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Plain fields always take the override config's value. We can't distinguish
/// an explicitly-set value from a serde default here, so the later file wins.
/// The bundle denylist is merged as a union: a project config adds exclusions
/// on top of the user-level and built-in ones rather than dropping them.
pub fn merge_configs(base: WinkConfig, override_config: WinkConfig) -> WinkConfig {
    WinkConfig {
        filter: FilterConfig {
            min_width: override_config.filter.min_width,
            min_height: override_config.filter.min_height,
            excluded_bundles: {
                let mut merged = base.filter.excluded_bundles;
                for bundle in override_config.filter.excluded_bundles {
                    if !merged.contains(&bundle) {
                        merged.push(bundle);
                    }
                }
                merged
            },
        },
        accessibility: AccessibilityConfig {
            messaging_timeout_secs: override_config.accessibility.messaging_timeout_secs,
        },
    }
}
