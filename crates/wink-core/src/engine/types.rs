use serde::Serialize;
use std::path::PathBuf;

use crate::source::ActivationHandle;

/// Stable identity of a window record within one refresh.
///
/// Duplicate identities are dropped during reconciliation. Identity is
/// unique within a single built list but not across refreshes; ordinals
/// shift as windows open and close.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum WindowIdentity {
    /// Window discovered through a process's accessibility tree.
    Ax {
        pid: i32,
        /// 1-based position in the process's accessibility window list.
        ordinal: usize,
        /// Display title at discovery time.
        title: String,
    },
    /// Window synthesized from a window-server entry no accessibility
    /// window accounted for.
    Server {
        pid: i32,
        /// Window-server window number.
        window_number: u32,
        /// Display title at discovery time.
        title: String,
    },
}

/// One switchable window in the reconciled list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowRecord {
    /// Dedup identity within the list this record belongs to.
    pub identity: WindowIdentity,
    /// Human-readable title. Never empty; untitled windows get an
    /// owner-derived fallback.
    pub title: String,
    /// Localized owning application name.
    pub owner_name: String,
    /// Icon path for UI layers that render one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_icon: Option<PathBuf>,
    /// Capability to bring this window to the foreground.
    pub activation: ActivationHandle,
    /// Owning process id.
    pub owner_pid: i32,
}

impl WindowRecord {
    /// Whether this record matches a search query.
    ///
    /// Empty queries match everything. Non-empty queries match
    /// case-insensitively against the title and the owner name.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.matches_needle(&query.to_lowercase())
    }

    /// Match against an already-lowercased needle, so search lowers the
    /// query once per call instead of once per record.
    pub(crate) fn matches_needle(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.owner_name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(title: &str, owner: &str) -> WindowRecord {
        WindowRecord {
            identity: WindowIdentity::Ax {
                pid: 100,
                ordinal: 1,
                title: title.to_string(),
            },
            title: title.to_string(),
            owner_name: owner.to_string(),
            owner_icon: None,
            activation: ActivationHandle::for_ax_window(100, 1, title),
            owner_pid: 100,
        }
    }

    #[test]
    fn test_identity_equality_includes_title() {
        let a = WindowIdentity::Ax {
            pid: 10,
            ordinal: 1,
            title: "Inbox".to_string(),
        };
        let b = WindowIdentity::Ax {
            pid: 10,
            ordinal: 1,
            title: "Drafts".to_string(),
        };

        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_variants_never_collide() {
        let mut seen = HashSet::new();
        seen.insert(WindowIdentity::Ax {
            pid: 10,
            ordinal: 1,
            title: "Same".to_string(),
        });
        let inserted = seen.insert(WindowIdentity::Server {
            pid: 10,
            window_number: 1,
            title: "Same".to_string(),
        });

        assert!(inserted);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_matches_query_empty_matches_everything() {
        assert!(record("Inbox", "Mail").matches_query(""));
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let r = record("Quarterly Report.pdf", "Preview");

        assert!(r.matches_query("quarterly"));
        assert!(r.matches_query("REPORT"));
        assert!(!r.matches_query("quarterlyx"));
    }

    #[test]
    fn test_matches_query_covers_owner_name() {
        let r = record("Untitled", "Safari");

        assert!(r.matches_query("safari"));
    }

    #[test]
    fn test_matches_query_folds_unicode_case() {
        let r = record("CAFÉ MENU", "TextEdit");

        assert!(r.matches_query("café"));
    }

    #[test]
    fn test_record_omits_icon_from_json_when_absent() {
        let json = serde_json::to_string(&record("Inbox", "Mail")).unwrap();

        assert!(!json.contains("owner_icon"));
        assert!(json.contains("\"owner_pid\":100"));
    }
}
