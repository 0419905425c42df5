use serde::Serialize;
use std::path::PathBuf;

/// One raw entry from the window-server listing.
///
/// Parsed field-by-field from the heterogeneous OS dictionary; fields the
/// dictionary omits get the documented defaults rather than failing the
/// whole listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerWindow {
    /// Window-server window number, unique while the window exists.
    pub window_number: u32,
    /// Owning process id. `None` when the dictionary lacks the key;
    /// such entries are not switchable.
    pub owner_pid: Option<i32>,
    /// Z-order category. 0 is the normal application layer; anything else
    /// is chrome, overlays, or system UI.
    pub layer: i32,
    /// Window title as the window server reports it. Usually empty unless
    /// the caller holds the screen-capture entitlement.
    pub title: String,
    /// Whether the window is on the active Space's visible set.
    pub on_screen: bool,
    /// Window alpha. 1.0 when the dictionary lacks the key.
    pub alpha: f64,
    /// Bounds width in logical units.
    pub width: f64,
    /// Bounds height in logical units.
    pub height: f64,
}

impl ServerWindow {
    /// Whether the window clears the minimum-size filter.
    ///
    /// A window is dropped only when it is too small on *both* axes;
    /// sidebars and drawers are legitimately narrow on one.
    pub fn meets_minimum_size(&self, min_width: f64, min_height: f64) -> bool {
        self.width >= min_width || self.height >= min_height
    }
}

/// One raw window from a process's accessibility tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AxWindow {
    /// 1-based position in the process's accessibility window list.
    pub ordinal: usize,
    /// Accessibility title. Empty when the process does not publish one.
    pub title: String,
    /// Whether the window is minimized to the Dock.
    pub minimized: bool,
}

/// Display metadata for a window-owning process.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProcess {
    /// Localized application name shown next to window titles.
    pub display_name: String,
    /// Bundle identifier, used for denylist matching. `None` for
    /// bundle-less processes (rare for window owners).
    pub bundle_id: Option<String>,
    /// Filesystem path the application's icon can be loaded from.
    pub icon_path: Option<PathBuf>,
}

/// What a window's activation handle points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ActivationTarget {
    /// A specific accessibility window, re-resolvable from its owning
    /// process by title (ordinal as a fallback hint).
    AxWindow { ordinal: usize, title: String },
    /// No per-window handle exists; activation can only foreground the
    /// process. Used for windows synthesized from window-server data.
    ProcessOnly,
}

/// Opaque capability to bring a window to the foreground.
///
/// Built by the source, carried on each window record, and handed back to
/// the source at activation time. Callers never inspect the target beyond
/// [`ActivationHandle::is_process_only`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationHandle {
    pid: i32,
    target: ActivationTarget,
}

impl ActivationHandle {
    /// Handle for a window discovered through the accessibility tree.
    pub fn for_ax_window(pid: i32, ordinal: usize, title: impl Into<String>) -> Self {
        Self {
            pid,
            target: ActivationTarget::AxWindow {
                ordinal,
                title: title.into(),
            },
        }
    }

    /// Handle for a window only the window server knows about.
    pub fn process_only(pid: i32) -> Self {
        Self {
            pid,
            target: ActivationTarget::ProcessOnly,
        }
    }

    /// Owning process id.
    pub fn pid(&self) -> i32 {
        self.pid
    }

    /// The window-level target, if any.
    pub fn target(&self) -> &ActivationTarget {
        &self.target
    }

    /// Whether window-level focus is unavailable for this handle.
    pub fn is_process_only(&self) -> bool {
        matches!(self.target, ActivationTarget::ProcessOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_window(width: f64, height: f64) -> ServerWindow {
        ServerWindow {
            window_number: 1,
            owner_pid: Some(100),
            layer: 0,
            title: String::new(),
            on_screen: true,
            alpha: 1.0,
            width,
            height,
        }
    }

    #[test]
    fn test_minimum_size_requires_both_axes_to_fail() {
        // Narrow sidebar: fails width, passes height
        assert!(server_window(30.0, 600.0).meets_minimum_size(50.0, 50.0));
        // Short toolbar strip: passes width, fails height
        assert!(server_window(800.0, 20.0).meets_minimum_size(50.0, 50.0));
        // Menu extra: fails both
        assert!(!server_window(22.0, 22.0).meets_minimum_size(50.0, 50.0));
        // Degenerate
        assert!(!server_window(0.0, 0.0).meets_minimum_size(50.0, 50.0));
    }

    #[test]
    fn test_minimum_size_boundary_is_inclusive() {
        assert!(server_window(50.0, 0.0).meets_minimum_size(50.0, 50.0));
    }

    #[test]
    fn test_activation_handle_for_ax_window() {
        let handle = ActivationHandle::for_ax_window(4242, 2, "Inbox");

        assert_eq!(handle.pid(), 4242);
        assert!(!handle.is_process_only());
        assert_eq!(
            handle.target(),
            &ActivationTarget::AxWindow {
                ordinal: 2,
                title: "Inbox".to_string()
            }
        );
    }

    #[test]
    fn test_activation_handle_process_only() {
        let handle = ActivationHandle::process_only(4242);

        assert_eq!(handle.pid(), 4242);
        assert!(handle.is_process_only());
    }

    #[test]
    fn test_activation_handle_serializes_target_kind() {
        let handle = ActivationHandle::process_only(7);
        let json = serde_json::to_string(&handle).unwrap();

        assert!(json.contains("ProcessOnly"));
        assert!(json.contains("\"pid\":7"));
    }
}
