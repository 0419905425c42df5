//! Shared helpers for command handlers.

use tracing::warn;

use wink_core::config::WinkConfig;
use wink_core::engine::EngineError;
use wink_core::events;
use wink_core::window_ops;
use wink_core::{WindowRecord, WindowSource};

/// Load the config hierarchy, warning and falling back to defaults when
/// it cannot be loaded.
pub(crate) fn load_config_with_warning() -> WinkConfig {
    match WinkConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.wink/config.toml and ./.wink/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            WinkConfig::default()
        }
    }
}

/// Refresh the window list, logging the structured permission hint when
/// discovery is blocked on the accessibility entitlement.
pub(crate) fn refresh_records(
    source: &dyn WindowSource,
    config: &WinkConfig,
) -> Result<Vec<WindowRecord>, EngineError> {
    match window_ops::refresh_windows(source, config) {
        Ok(records) => Ok(records),
        Err(e) => {
            if matches!(e, EngineError::PermissionDenied) {
                events::log_permission_hint();
            }
            Err(e)
        }
    }
}

/// Print the remediation tip for permission failures.
pub(crate) fn print_permission_tip(error: &EngineError) {
    if matches!(error, EngineError::PermissionDenied) {
        eprintln!(
            "Tip: Enable wink under System Settings > Privacy & Security > Accessibility, then retry."
        );
    }
}

/// Render records to stdout as a table or pretty JSON.
pub(crate) fn render_records(
    records: &[WindowRecord],
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
        println!("No windows found.");
    } else {
        let formatter = crate::table::TableFormatter::new(records);
        formatter.print_table(records);
    }
    Ok(())
}
