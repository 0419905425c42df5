//! Two-step window activation.

use tracing::{debug, info};

use crate::engine::errors::EngineError;
use crate::engine::types::WindowRecord;
use crate::source::{SourceError, WindowSource};

/// Bring a record's window to the foreground.
///
/// The owning process is activated first, then the specific window is
/// focused. The order is load-bearing: focusing a window inside a
/// background process does not reliably raise it. Records synthesized
/// without a window-level handle stop after process activation.
pub fn activate_window(source: &dyn WindowSource, record: &WindowRecord) -> Result<(), EngineError> {
    info!(
        event = "core.engine.activate_started",
        title = %record.title,
        pid = record.owner_pid
    );

    source
        .activate_process(record.activation.pid())
        .map_err(|e| activation_error(record, e))?;

    if record.activation.is_process_only() {
        debug!(
            event = "core.engine.window_focus_skipped",
            title = %record.title,
            pid = record.owner_pid,
            reason = "process_only_handle"
        );
        return Ok(());
    }

    source
        .focus_window(&record.activation)
        .map_err(|e| activation_error(record, e))?;

    info!(
        event = "core.engine.activate_completed",
        title = %record.title,
        pid = record.owner_pid
    );
    Ok(())
}

fn activation_error(record: &WindowRecord, err: SourceError) -> EngineError {
    EngineError::ActivationFailed {
        title: record.title.clone(),
        message: err.to_string(),
    }
}
