pub mod errors;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use errors::SourceError;
#[cfg(target_os = "macos")]
pub use macos::MacosWindowSource;
pub use traits::WindowSource;
pub use types::{ActivationHandle, ActivationTarget, AxWindow, ResolvedProcess, ServerWindow};

use crate::config::WinkConfig;

/// Construct the platform window source.
#[cfg(target_os = "macos")]
pub fn platform_source(config: &WinkConfig) -> Result<Box<dyn WindowSource>, SourceError> {
    Ok(Box::new(MacosWindowSource::new(config)))
}

/// Construct the platform window source.
///
/// Only macOS has one; other platforms get `SourceError::Unsupported` so
/// callers surface a clear message instead of an empty window list.
#[cfg(not(target_os = "macos"))]
pub fn platform_source(_config: &WinkConfig) -> Result<Box<dyn WindowSource>, SourceError> {
    Err(SourceError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_platform_source_unsupported_off_macos() {
        let config = WinkConfig::default();
        let result = platform_source(&config);
        assert!(matches!(result, Err(SourceError::Unsupported)));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_platform_source_builds_on_macos() {
        let config = WinkConfig::default();
        assert!(platform_source(&config).is_ok());
    }
}
