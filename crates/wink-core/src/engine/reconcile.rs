//! Window list reconciliation.
//!
//! Merges the flat window-server listing with per-process accessibility
//! trees into one deduplicated list of switchable windows. The server
//! listing is authoritative for which processes own real windows; the
//! accessibility tree is authoritative for titles, minimized state, and
//! per-window activation handles.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::WinkConfig;
use crate::engine::errors::EngineError;
use crate::engine::types::{WindowIdentity, WindowRecord};
use crate::source::{
    ActivationHandle, AxWindow, ResolvedProcess, ServerWindow, SourceError, WindowSource,
};

/// One process's surviving window-server entries, in discovery order.
struct OwnerGroup {
    pid: i32,
    entries: Vec<ServerWindow>,
}

/// Build the reconciled window list.
///
/// Server entries on a non-zero layer, fully transparent, undersized on
/// both axes, or without an owning process are dropped up front. The
/// survivors are grouped per process; each group is then merged with
/// that process's accessibility windows, and entries no accessibility
/// window accounts for are synthesized into process-only records.
///
/// A missing accessibility permission aborts the whole refresh; the
/// caller never gets a partial list for a permission failure. Any other
/// per-process accessibility failure degrades just that group to
/// synthesized records.
pub fn refresh_windows(
    source: &dyn WindowSource,
    config: &WinkConfig,
) -> Result<Vec<WindowRecord>, EngineError> {
    info!(event = "core.engine.refresh_started");

    let server_windows = source.list_server_windows()?;
    let groups = group_by_owner(server_windows, config);

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for group in &groups {
        let Some(process) = source.resolve_process(group.pid) else {
            debug!(
                event = "core.engine.group_skipped",
                pid = group.pid,
                reason = "process_unresolved"
            );
            continue;
        };

        if let Some(bundle_id) = &process.bundle_id
            && config.filter.is_excluded(bundle_id)
        {
            debug!(
                event = "core.engine.group_skipped",
                pid = group.pid,
                bundle_id = %bundle_id,
                reason = "denylisted"
            );
            continue;
        }

        merge_group(source, group, &process, &mut records, &mut seen)?;
    }

    info!(
        event = "core.engine.refresh_completed",
        window_count = records.len()
    );
    Ok(records)
}

/// Partition surviving server entries into per-process groups.
///
/// Group order follows each process's first appearance in the listing,
/// which the window server reports front to back.
fn group_by_owner(windows: Vec<ServerWindow>, config: &WinkConfig) -> Vec<OwnerGroup> {
    let mut groups: Vec<OwnerGroup> = Vec::new();

    for window in windows {
        let Some(pid) = window.owner_pid else {
            debug!(
                event = "core.engine.server_window_skipped",
                window_number = window.window_number,
                reason = "owner_unresolved"
            );
            continue;
        };
        if window.layer != 0 {
            debug!(
                event = "core.engine.server_window_skipped",
                window_number = window.window_number,
                layer = window.layer,
                reason = "layered"
            );
            continue;
        }
        if window.alpha <= 0.0 {
            debug!(
                event = "core.engine.server_window_skipped",
                window_number = window.window_number,
                reason = "transparent"
            );
            continue;
        }
        if !window.meets_minimum_size(config.filter.min_width, config.filter.min_height) {
            debug!(
                event = "core.engine.server_window_skipped",
                window_number = window.window_number,
                reason = "undersized"
            );
            continue;
        }

        match groups.iter_mut().find(|g| g.pid == pid) {
            Some(group) => group.entries.push(window),
            None => groups.push(OwnerGroup {
                pid,
                entries: vec![window],
            }),
        }
    }

    groups
}

/// Merge one process's accessibility windows with its server entries.
///
/// Every accessibility window claims one unclaimed server entry while
/// any remain, so counts stay balanced even though server titles are
/// usually empty. Minimized windows still claim an entry (they appear
/// in the all-windows server listing) but emit no record, and whatever
/// the accessibility tree leaves unclaimed is synthesized afterwards.
fn merge_group(
    source: &dyn WindowSource,
    group: &OwnerGroup,
    process: &ResolvedProcess,
    records: &mut Vec<WindowRecord>,
    seen: &mut HashSet<WindowIdentity>,
) -> Result<(), EngineError> {
    let ax_windows = fetch_ax_windows(source, group.pid)?;
    let mut claimed = vec![false; group.entries.len()];

    for ax in &ax_windows {
        let donor_title = claim_server_entry(&group.entries, &mut claimed, &ax.title);

        if ax.minimized {
            debug!(
                event = "core.engine.ax_window_skipped",
                pid = group.pid,
                ordinal = ax.ordinal,
                reason = "minimized"
            );
            continue;
        }

        let title = display_title(&ax.title, donor_title, &process.display_name, ax.ordinal);
        push_unique(
            records,
            seen,
            WindowRecord {
                identity: WindowIdentity::Ax {
                    pid: group.pid,
                    ordinal: ax.ordinal,
                    title: title.clone(),
                },
                title,
                owner_name: process.display_name.clone(),
                owner_icon: process.icon_path.clone(),
                // The handle carries the raw accessibility title: that is
                // what focus can re-match later, not the display title.
                activation: ActivationHandle::for_ax_window(group.pid, ax.ordinal, ax.title.clone()),
                owner_pid: group.pid,
            },
        );
    }

    for (index, entry) in group.entries.iter().enumerate() {
        if claimed[index] {
            continue;
        }
        let ordinal = index + 1;
        let title = if entry.title.is_empty() {
            fallback_title(&process.display_name, ordinal)
        } else {
            entry.title.clone()
        };
        debug!(
            event = "core.engine.window_synthesized",
            pid = group.pid,
            window_number = entry.window_number
        );
        push_unique(
            records,
            seen,
            WindowRecord {
                identity: WindowIdentity::Server {
                    pid: group.pid,
                    window_number: entry.window_number,
                    title: title.clone(),
                },
                title,
                owner_name: process.display_name.clone(),
                owner_icon: process.icon_path.clone(),
                activation: ActivationHandle::process_only(group.pid),
                owner_pid: group.pid,
            },
        );
    }

    Ok(())
}

/// Fetch a process's accessibility windows.
///
/// A permission failure aborts the refresh (every group would fail the
/// same way). Any other failure degrades this group to synthesized
/// records and the refresh continues.
fn fetch_ax_windows(source: &dyn WindowSource, pid: i32) -> Result<Vec<AxWindow>, EngineError> {
    match source.list_ax_windows(pid) {
        Ok(windows) => Ok(windows),
        Err(SourceError::PermissionDenied) => Err(EngineError::PermissionDenied),
        Err(e) => {
            warn!(
                event = "core.engine.ax_listing_failed",
                pid = pid,
                error = %e
            );
            Ok(Vec::new())
        }
    }
}

/// Claim one unclaimed server entry for an accessibility window and
/// return its title.
///
/// A titled accessibility window prefers its exact-title twin, then an
/// untitled entry. An untitled accessibility window prefers a titled
/// entry, whose title then serves as its display title. Either way the
/// first unclaimed entry is the last resort, so synthesis only sees
/// entries no accessibility window accounts for.
fn claim_server_entry(
    entries: &[ServerWindow],
    claimed: &mut [bool],
    ax_title: &str,
) -> Option<String> {
    let preferred = if ax_title.is_empty() {
        (0..entries.len()).find(|&i| !claimed[i] && !entries[i].title.is_empty())
    } else {
        (0..entries.len())
            .find(|&i| !claimed[i] && entries[i].title == ax_title)
            .or_else(|| (0..entries.len()).find(|&i| !claimed[i] && entries[i].title.is_empty()))
    };
    let index = preferred.or_else(|| (0..entries.len()).find(|&i| !claimed[i]))?;

    claimed[index] = true;
    Some(entries[index].title.clone())
}

/// Pick the title shown for an accessibility-discovered window.
fn display_title(
    ax_title: &str,
    donor_title: Option<String>,
    owner_name: &str,
    ordinal: usize,
) -> String {
    if !ax_title.is_empty() {
        return ax_title.to_string();
    }
    match donor_title {
        Some(title) if !title.is_empty() => title,
        _ => fallback_title(owner_name, ordinal),
    }
}

/// Owner-derived stand-in for windows with no usable title anywhere.
fn fallback_title(owner_name: &str, ordinal: usize) -> String {
    format!("{} - Window {}", owner_name, ordinal)
}

fn push_unique(
    records: &mut Vec<WindowRecord>,
    seen: &mut HashSet<WindowIdentity>,
    record: WindowRecord,
) {
    if seen.insert(record.identity.clone()) {
        records.push(record);
    } else {
        debug!(
            event = "core.engine.duplicate_identity_skipped",
            title = %record.title
        );
    }
}
