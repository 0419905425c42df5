//! Published window list for concurrent readers.

use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::config::WinkConfig;
use crate::engine::errors::EngineError;
use crate::engine::reconcile::refresh_windows;
use crate::engine::types::WindowRecord;
use crate::source::WindowSource;

/// Holds the most recently built window list.
///
/// Readers take cheap snapshots that stay valid across refreshes; a
/// refresh builds the new list off to the side and publishes it with a
/// single pointer swap, so readers never observe a half-built list.
#[derive(Default)]
pub struct WindowCatalog {
    records: RwLock<Arc<Vec<WindowRecord>>>,
}

impl WindowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the list from the source and publish it.
    ///
    /// On failure the previously published list stays in place.
    pub fn refresh(
        &self,
        source: &dyn WindowSource,
        config: &WinkConfig,
    ) -> Result<Arc<Vec<WindowRecord>>, EngineError> {
        let records = Arc::new(refresh_windows(source, config)?);

        match self.records.write() {
            Ok(mut guard) => *guard = Arc::clone(&records),
            Err(e) => {
                warn!(
                    event = "core.engine.catalog_lock_poisoned",
                    "Recovering poisoned catalog lock on publish"
                );
                *e.into_inner() = Arc::clone(&records);
            }
        }
        Ok(records)
    }

    /// The currently published list.
    pub fn snapshot(&self) -> Arc<Vec<WindowRecord>> {
        match self.records.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(e) => {
                warn!(
                    event = "core.engine.catalog_lock_poisoned",
                    "Recovering poisoned catalog lock on read"
                );
                Arc::clone(&e.into_inner())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ActivationHandle, AxWindow, ResolvedProcess, ServerWindow, SourceError};

    /// Source whose server listing has a fixed number of plain windows
    /// for one process, with no accessibility data.
    struct StaticSource {
        window_count: u32,
        permission_denied: bool,
    }

    impl StaticSource {
        fn with_windows(window_count: u32) -> Self {
            Self {
                window_count,
                permission_denied: false,
            }
        }

        fn denied() -> Self {
            Self {
                window_count: 0,
                permission_denied: true,
            }
        }
    }

    impl WindowSource for StaticSource {
        fn list_server_windows(&self) -> Result<Vec<ServerWindow>, SourceError> {
            if self.permission_denied {
                return Err(SourceError::PermissionDenied);
            }
            Ok((0..self.window_count)
                .map(|i| ServerWindow {
                    window_number: 100 + i,
                    owner_pid: Some(10),
                    layer: 0,
                    title: String::new(),
                    on_screen: true,
                    alpha: 1.0,
                    width: 800.0,
                    height: 600.0,
                })
                .collect())
        }

        fn list_ax_windows(&self, _pid: i32) -> Result<Vec<AxWindow>, SourceError> {
            Ok(Vec::new())
        }

        fn resolve_process(&self, _pid: i32) -> Option<ResolvedProcess> {
            Some(ResolvedProcess {
                display_name: "App".to_string(),
                bundle_id: None,
                icon_path: None,
            })
        }

        fn activate_process(&self, _pid: i32) -> Result<(), SourceError> {
            Ok(())
        }

        fn focus_window(&self, _handle: &ActivationHandle) -> Result<(), SourceError> {
            Ok(())
        }
    }

    #[test]
    fn test_snapshot_starts_empty() {
        assert!(WindowCatalog::new().snapshot().is_empty());
    }

    #[test]
    fn test_refresh_publishes_new_list() {
        let catalog = WindowCatalog::new();

        let published = catalog
            .refresh(&StaticSource::with_windows(2), &WinkConfig::default())
            .unwrap();

        assert_eq!(published.len(), 2);
        assert_eq!(catalog.snapshot().len(), 2);
    }

    #[test]
    fn test_existing_snapshot_survives_refresh() {
        let catalog = WindowCatalog::new();
        catalog
            .refresh(&StaticSource::with_windows(2), &WinkConfig::default())
            .unwrap();
        let held = catalog.snapshot();

        catalog
            .refresh(&StaticSource::with_windows(3), &WinkConfig::default())
            .unwrap();

        assert_eq!(held.len(), 2);
        assert_eq!(catalog.snapshot().len(), 3);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_list() {
        let catalog = WindowCatalog::new();
        catalog
            .refresh(&StaticSource::with_windows(2), &WinkConfig::default())
            .unwrap();

        let err = catalog
            .refresh(&StaticSource::denied(), &WinkConfig::default())
            .unwrap_err();

        assert!(matches!(err, EngineError::PermissionDenied));
        assert_eq!(catalog.snapshot().len(), 2);
    }
}
