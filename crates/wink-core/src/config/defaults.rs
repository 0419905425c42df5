//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{AccessibilityConfig, FilterConfig};

/// The switcher's own bundle identifier.
///
/// Always on the default denylist so the search panel never offers its own
/// window as a switch target.
pub const OWN_BUNDLE_ID: &str = "dev.wink.switcher";

/// Returns the default minimum window width (50 logical units).
///
/// Window-server entries below the minimum on both axes are menu extras,
/// tooltips, and similar chrome rather than switchable windows.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_min_width() -> f64 {
    50.0
}

/// Returns the default minimum window height (50 logical units).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_min_height() -> f64 {
    50.0
}

/// Returns the default bundle denylist.
///
/// The login window and Spotlight keep transparent full-screen windows on
/// the normal layer; listing them would offer targets that cannot be
/// meaningfully activated.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_excluded_bundles() -> Vec<String> {
    vec![
        "com.apple.loginwindow".to_string(),
        "com.apple.Spotlight".to_string(),
        OWN_BUNDLE_ID.to_string(),
    ]
}

/// Returns the default accessibility messaging timeout (1.0 seconds).
///
/// One second is long enough for a busy process to answer a windows query
/// and short enough that a hung process does not stall the whole refresh.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_messaging_timeout_secs() -> f32 {
    1.0
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            min_height: default_min_height(),
            excluded_bundles: default_excluded_bundles(),
        }
    }
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            messaging_timeout_secs: default_messaging_timeout_secs(),
        }
    }
}
