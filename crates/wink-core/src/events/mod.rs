use tracing::{error, info, warn};

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Log the accessibility-permission remediation hint once.
///
/// Emitted when window discovery fails with a permission error; the hint
/// names the System Settings pane the user has to visit.
pub fn log_permission_hint() {
    warn!(
        event = "core.app.permission_hint",
        hint = "Grant accessibility access in System Settings > Privacy & Security > Accessibility, then retry"
    );
}
