use wink_core::WindowRecord;

pub struct TableFormatter {
    title_width: usize,
    app_width: usize,
    pid_width: usize,
    kind_width: usize,
}

impl TableFormatter {
    pub fn new(records: &[WindowRecord]) -> Self {
        let title_width = records
            .iter()
            .map(|r| r.title.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(5, 60); // Between "Title" header min and reasonable terminal width max
        let app_width = records
            .iter()
            .map(|r| r.owner_name.chars().count())
            .max()
            .unwrap_or(12)
            .clamp(3, 24);

        Self {
            title_width,
            app_width,
            pid_width: 7,
            kind_width: 6,
        }
    }

    pub fn print_table(&self, records: &[WindowRecord]) {
        self.print_header();
        for record in records {
            self.print_row(record);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, record: &WindowRecord) {
        let kind = if record.activation.is_process_only() {
            "app"
        } else {
            "window"
        };

        println!(
            "│ {:<width_title$} │ {:<width_app$} │ {:<width_pid$} │ {:<width_kind$} │",
            truncate(&record.title, self.title_width),
            truncate(&record.owner_name, self.app_width),
            record.owner_pid,
            kind,
            width_title = self.title_width,
            width_app = self.app_width,
            width_pid = self.pid_width,
            width_kind = self.kind_width,
        );
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┬{}┬{}┐",
            "─".repeat(self.title_width + 2),
            "─".repeat(self.app_width + 2),
            "─".repeat(self.pid_width + 2),
            "─".repeat(self.kind_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_title$} │ {:<width_app$} │ {:<width_pid$} │ {:<width_kind$} │",
            "Title",
            "App",
            "PID",
            "Kind",
            width_title = self.title_width,
            width_app = self.app_width,
            width_pid = self.pid_width,
            width_kind = self.kind_width,
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┼{}┼{}┤",
            "─".repeat(self.title_width + 2),
            "─".repeat(self.app_width + 2),
            "─".repeat(self.pid_width + 2),
            "─".repeat(self.kind_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┴{}┴{}┘",
            "─".repeat(self.title_width + 2),
            "─".repeat(self.app_width + 2),
            "─".repeat(self.pid_width + 2),
            "─".repeat(self.kind_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wink_core::source::ActivationHandle;
    use wink_core::{WindowIdentity, WindowRecord};

    fn record(title: &str, owner: &str) -> WindowRecord {
        WindowRecord {
            identity: WindowIdentity::Ax {
                pid: 10,
                ordinal: 1,
                title: title.to_string(),
            },
            title: title.to_string(),
            owner_name: owner.to_string(),
            owner_icon: None,
            activation: ActivationHandle::for_ax_window(10, 1, title),
            owner_pid: 10,
        }
    }

    #[test]
    fn test_truncate_short_string_pads() {
        assert_eq!(truncate("abc", 5), "abc  ");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("abcdefgh", 6), "abc...");
    }

    #[test]
    fn test_truncate_multibyte_titles() {
        // Must not panic on non-ASCII; counts characters, not bytes
        let result = truncate("Терминал — долгое название окна", 10);
        assert_eq!(result.chars().count(), 10);
    }

    #[test]
    fn test_title_width_follows_longest_title() {
        let records = vec![
            record("short", "App"),
            record("a noticeably longer window title", "App"),
        ];

        let formatter = TableFormatter::new(&records);

        assert_eq!(formatter.title_width, "a noticeably longer window title".len());
    }

    #[test]
    fn test_title_width_is_clamped() {
        let records = vec![record(&"x".repeat(200), "App")];

        let formatter = TableFormatter::new(&records);

        assert_eq!(formatter.title_width, 60);
    }
}
