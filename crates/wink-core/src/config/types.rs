//! Configuration type definitions for the wink switcher.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [filter]
//! min_width = 50.0
//! min_height = 50.0
//! excluded_bundles = ["com.apple.loginwindow", "com.apple.Spotlight"]
//!
//! [accessibility]
//! messaging_timeout_secs = 1.0
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.wink/config.toml`
/// 2. Project config: `./.wink/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WinkConfig {
    /// Window-server filtering rules
    #[serde(default)]
    pub filter: FilterConfig,

    /// Accessibility query behavior
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

/// Rules deciding which window-server entries are switchable.
///
/// Entries smaller than the minimum on both axes are dropped; failing a
/// single axis keeps the entry (sidebars and drawers are legitimately
/// narrow). The bundle denylist removes system processes whose windows
/// should never be offered for switching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum window width in logical units.
    /// Default: 50.0.
    #[serde(default = "super::defaults::default_min_width")]
    pub min_width: f64,

    /// Minimum window height in logical units.
    /// Default: 50.0.
    #[serde(default = "super::defaults::default_min_height")]
    pub min_height: f64,

    /// Bundle identifiers whose windows never appear in results.
    /// Default: login window, Spotlight, and the switcher itself.
    #[serde(default = "super::defaults::default_excluded_bundles")]
    pub excluded_bundles: Vec<String>,
}

/// Accessibility query behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    /// Per-process accessibility messaging timeout in seconds.
    ///
    /// Bounds how long one unresponsive process can stall a refresh; on
    /// timeout that process contributes window-server data only.
    /// Default: 1.0.
    #[serde(default = "super::defaults::default_messaging_timeout_secs")]
    pub messaging_timeout_secs: f32,
}

impl FilterConfig {
    /// Whether a bundle identifier is on the denylist.
    pub fn is_excluded(&self, bundle_id: &str) -> bool {
        self.excluded_bundles.iter().any(|b| b == bundle_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_config_is_excluded() {
        let config = FilterConfig::default();
        assert!(config.is_excluded("com.apple.loginwindow"));
        assert!(config.is_excluded("com.apple.Spotlight"));
        assert!(!config.is_excluded("com.apple.Safari"));
    }

    #[test]
    fn test_filter_config_is_excluded_is_case_sensitive() {
        // Bundle identifiers are exact strings; the OS reports them with
        // stable casing, so no folding is applied.
        let config = FilterConfig::default();
        assert!(!config.is_excluded("com.apple.spotlight"));
    }

    #[test]
    fn test_wink_config_from_partial_toml() {
        let config: WinkConfig = toml::from_str(
            r#"
[filter]
min_width = 100.0
"#,
        )
        .unwrap();

        assert_eq!(config.filter.min_width, 100.0);
        // Unspecified fields keep their documented defaults
        assert_eq!(config.filter.min_height, 50.0);
        assert_eq!(config.accessibility.messaging_timeout_secs, 1.0);
        assert!(config.filter.is_excluded("com.apple.loginwindow"));
    }

    #[test]
    fn test_excluded_bundles_override_replaces_defaults() {
        let config: WinkConfig = toml::from_str(
            r#"
[filter]
excluded_bundles = ["com.example.kiosk"]
"#,
        )
        .unwrap();

        assert!(config.filter.is_excluded("com.example.kiosk"));
        // Within a single file, an explicit list replaces the serde default.
        // Hierarchy merging unions lists across files (see loading.rs).
        assert!(!config.filter.is_excluded("com.apple.loginwindow"));
    }
}
