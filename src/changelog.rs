//! Changelog entry model and Markdown rendering.

use chrono::{Local, NaiveDate};

/// Heading line written when the changelog file is created.
pub const CHANGELOG_HEADER: &str = "# Changelog\n";

/// One dated changelog section, appended per applied update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version_name: String,
    pub version_code: u32,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl ChangelogEntry {
    /// Entry dated with the local calendar date.
    pub fn new(
        version_name: impl Into<String>,
        version_code: u32,
        notes: Option<String>,
    ) -> Self {
        Self::with_date(
            version_name,
            version_code,
            Local::now().date_naive(),
            notes,
        )
    }

    /// Entry with an explicit date, for deterministic rendering in tests.
    pub fn with_date(
        version_name: impl Into<String>,
        version_code: u32,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        ChangelogEntry {
            version_name: version_name.into(),
            version_code,
            date,
            notes,
        }
    }

    /// Render the Markdown section: a dated heading, the version/build
    /// bullet, then one bullet per non-empty notes line.
    pub fn render(&self) -> String {
        let mut section = format!(
            "\n## [{}] - {}\n- Version updated to {} (build {})\n",
            self.version_name,
            self.date.format("%Y-%m-%d"),
            self.version_name,
            self.version_code
        );
        if let Some(notes) = &self.notes {
            for line in notes.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    section.push_str(&format!("- {}\n", line));
                }
            }
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_render_without_notes() {
        let entry = ChangelogEntry::with_date("1.2.4", 6, sample_date(), None);
        assert_eq!(
            entry.render(),
            "\n## [1.2.4] - 2026-08-07\n- Version updated to 1.2.4 (build 6)\n"
        );
    }

    #[test]
    fn test_render_with_single_note() {
        let entry = ChangelogEntry::with_date(
            "2.0.0",
            7,
            sample_date(),
            Some("Reworked login flow".to_string()),
        );
        let rendered = entry.render();
        assert!(rendered.contains("## [2.0.0] - 2026-08-07"));
        assert!(rendered.contains("- Reworked login flow\n"));
    }

    #[test]
    fn test_render_multiline_notes_one_bullet_per_line() {
        let entry = ChangelogEntry::with_date(
            "1.3.0",
            6,
            sample_date(),
            Some("Added dark mode\nFixed crash on startup".to_string()),
        );
        let rendered = entry.render();
        assert!(rendered.contains("- Added dark mode\n"));
        assert!(rendered.contains("- Fixed crash on startup\n"));
    }

    #[test]
    fn test_render_skips_blank_note_lines() {
        let entry = ChangelogEntry::with_date(
            "1.3.0",
            6,
            sample_date(),
            Some("First\n\n   \nSecond".to_string()),
        );
        let bullets = entry.render().matches("\n- ").count();
        // version bullet + two note bullets
        assert_eq!(bullets, 3);
    }

    #[test]
    fn test_new_uses_today() {
        let entry = ChangelogEntry::new("1.0.0", 1, None);
        assert_eq!(entry.date, Local::now().date_naive());
    }
}
