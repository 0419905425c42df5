//! Configuration validation logic.
//!
//! This module contains validation functions for configuration values,
//! ensuring they are valid before being used by the application.

use crate::config::types::WinkConfig;
use crate::errors::ConfigError;

/// Upper bound for the accessibility messaging timeout in seconds.
///
/// A refresh queries every window-owning process sequentially; anything
/// beyond this makes a single hung process freeze the switcher for longer
/// than a user would wait.
pub const MAX_MESSAGING_TIMEOUT_SECS: f32 = 30.0;

/// Validate a WinkConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Minimum width/height must be finite and non-negative
/// - The accessibility messaging timeout must be positive and at most
///   [`MAX_MESSAGING_TIMEOUT_SECS`]
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` naming the offending field.
pub fn validate_config(config: &WinkConfig) -> Result<(), ConfigError> {
    if !config.filter.min_width.is_finite() || config.filter.min_width < 0.0 {
        return Err(ConfigError::ValidationFailed {
            message: format!(
                "filter.min_width must be finite and non-negative, got {}",
                config.filter.min_width
            ),
        });
    }

    if !config.filter.min_height.is_finite() || config.filter.min_height < 0.0 {
        return Err(ConfigError::ValidationFailed {
            message: format!(
                "filter.min_height must be finite and non-negative, got {}",
                config.filter.min_height
            ),
        });
    }

    let timeout = config.accessibility.messaging_timeout_secs;
    if !timeout.is_finite() || timeout <= 0.0 || timeout > MAX_MESSAGING_TIMEOUT_SECS {
        return Err(ConfigError::ValidationFailed {
            message: format!(
                "accessibility.messaging_timeout_secs must be in (0, {}], got {}",
                MAX_MESSAGING_TIMEOUT_SECS, timeout
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WinkConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_negative_min_width_fails() {
        let mut config = WinkConfig::default();
        config.filter.min_width = -1.0;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("filter.min_width")
        );
    }

    #[test]
    fn test_nan_min_height_fails() {
        let mut config = WinkConfig::default();
        config.filter.min_height = f64::NAN;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_fails() {
        let mut config = WinkConfig::default();
        config.accessibility.messaging_timeout_secs = 0.0;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("messaging_timeout_secs")
        );
    }

    #[test]
    fn test_excessive_timeout_fails() {
        let mut config = WinkConfig::default();
        config.accessibility.messaging_timeout_secs = 120.0;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_minimums_are_valid() {
        // Zero disables the size filter entirely; legitimate for kiosk-like
        // setups that want every window listed
        let mut config = WinkConfig::default();
        config.filter.min_width = 0.0;
        config.filter.min_height = 0.0;

        assert!(validate_config(&config).is_ok());
    }
}
