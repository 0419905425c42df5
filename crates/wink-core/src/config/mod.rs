//! # Configuration System
//!
//! Hierarchical TOML configuration system for the wink switcher.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.wink/config.toml` (global user preferences)
//! 3. **Project config** - `./.wink/config.toml` (per-directory overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.wink/config.toml
//! [filter]
//! min_width = 50.0
//! min_height = 50.0
//! excluded_bundles = ["com.apple.loginwindow", "com.apple.Spotlight"]
//!
//! [accessibility]
//! messaging_timeout_secs = 1.0
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use wink_core::config::WinkConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WinkConfig::load_hierarchy()?;
//!     assert!(config.filter.min_width >= 0.0);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use defaults::OWN_BUNDLE_ID;
pub use types::{AccessibilityConfig, FilterConfig, WinkConfig};
pub use validation::validate_config;

// Delegation for WinkConfig methods
impl WinkConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
