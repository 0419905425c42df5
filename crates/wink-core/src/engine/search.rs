//! Case-insensitive substring search over reconciled window lists.

use tracing::debug;

use crate::engine::types::WindowRecord;

/// Filter records to those matching the query, preserving order.
///
/// The query matches case-insensitively against each record's title and
/// owner name. An empty query returns the whole list unchanged, so
/// callers can treat "no query yet" and "query cleared" the same way.
pub fn search_windows(query: &str, records: &[WindowRecord]) -> Vec<WindowRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    let results: Vec<WindowRecord> = records
        .iter()
        .filter(|record| record.matches_needle(&needle))
        .cloned()
        .collect();

    debug!(
        event = "core.engine.search_completed",
        query = query,
        matched = results.len(),
        total = records.len()
    );
    results
}

/// Index-based variant of [`search_windows`] for callers that keep the
/// full list around and only need to know which rows matched.
pub fn filter_indices(query: &str, records: &[WindowRecord]) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches_needle(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::WindowIdentity;
    use crate::source::ActivationHandle;

    fn record(pid: i32, ordinal: usize, title: &str, owner: &str) -> WindowRecord {
        WindowRecord {
            identity: WindowIdentity::Ax {
                pid,
                ordinal,
                title: title.to_string(),
            },
            title: title.to_string(),
            owner_name: owner.to_string(),
            owner_icon: None,
            activation: ActivationHandle::for_ax_window(pid, ordinal, title),
            owner_pid: pid,
        }
    }

    fn sample_list() -> Vec<WindowRecord> {
        vec![
            record(10, 1, "Inbox — 42 unread", "Mail"),
            record(20, 1, "Quarterly Report.pdf", "Preview"),
            record(20, 2, "recipes.md", "Preview"),
            record(30, 1, "Терминал", "Terminal"),
        ]
    }

    #[test]
    fn test_search_empty_query_returns_everything_in_order() {
        let records = sample_list();

        let results = search_windows("", &records);

        assert_eq!(results, records);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search_windows("QUARTERLY", &sample_list());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Quarterly Report.pdf");
    }

    #[test]
    fn test_search_matches_owner_name() {
        let results = search_windows("preview", &sample_list());

        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Quarterly Report.pdf", "recipes.md"]);
    }

    #[test]
    fn test_search_preserves_input_order() {
        // "re" hits "unread", "Report", and "recipes"; hits keep the
        // input list's order.
        let results = search_windows("re", &sample_list());

        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Inbox — 42 unread", "Quarterly Report.pdf", "recipes.md"]
        );
    }

    #[test]
    fn test_search_folds_non_latin_case() {
        let results = search_windows("терминал", &sample_list());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Терминал");
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        assert!(search_windows("zzz-not-there", &sample_list()).is_empty());
    }

    #[test]
    fn test_filter_indices_agrees_with_search() {
        let records = sample_list();

        let indices = filter_indices("preview", &records);
        let results = search_windows("preview", &records);

        let via_indices: Vec<&WindowRecord> = indices.iter().map(|&i| &records[i]).collect();
        let direct: Vec<&WindowRecord> = results.iter().collect();
        assert_eq!(via_indices, direct);
    }

    #[test]
    fn test_filter_indices_empty_query_covers_all_rows() {
        let records = sample_list();

        assert_eq!(filter_indices("", &records), vec![0, 1, 2, 3]);
    }
}
