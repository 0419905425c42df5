//! Window source trait definition.

use crate::source::errors::SourceError;
use crate::source::types::{ActivationHandle, AxWindow, ResolvedProcess, ServerWindow};

/// Trait defining the interface to the OS window facilities.
///
/// The reconciliation engine consumes this trait only; the one real
/// implementation wraps the macOS window server and Accessibility API.
/// Tests substitute canned data.
pub trait WindowSource: Send + Sync {
    /// List every window the window server knows about.
    ///
    /// # Returns
    /// * `Ok(windows)` - Raw entries in the server's z-order, all layers
    /// * `Err(SourceError::PermissionDenied)` - Caller lacks the accessibility entitlement
    /// * `Err(SourceError::ListFailed)` - The listing call itself failed
    fn list_server_windows(&self) -> Result<Vec<ServerWindow>, SourceError>;

    /// List one process's windows from its accessibility tree.
    ///
    /// # Arguments
    /// * `pid` - The owning process id
    ///
    /// # Returns
    /// * `Ok(windows)` - Windows in the process's own order; empty when the
    ///   process publishes no accessibility tree (silent denial)
    /// * `Err(SourceError::AxTimeout)` - The process did not answer within
    ///   the messaging timeout
    /// * `Err(SourceError::AxQueryFailed)` - Any other accessibility failure
    fn list_ax_windows(&self, pid: i32) -> Result<Vec<AxWindow>, SourceError>;

    /// Resolve display metadata for a window-owning process.
    ///
    /// Returns `None` when no running application matches the pid; callers
    /// are expected to skip that process's windows.
    fn resolve_process(&self, pid: i32) -> Option<ResolvedProcess>;

    /// Bring a process to the foreground (best effort).
    fn activate_process(&self, pid: i32) -> Result<(), SourceError>;

    /// Make the handle's window its process's main, focused window.
    ///
    /// # Behavior
    /// - Callers must foreground the process first; focusing a window in a
    ///   background process is not visible to the user
    /// - Process-only handles cannot be focused; callers skip this call for
    ///   them rather than treating it as an error
    fn focus_window(&self, handle: &ActivationHandle) -> Result<(), SourceError>;
}
