//! Formatting of creation timestamps before they are bound into an insert.

use chrono::NaiveDateTime;
use clap::ValueEnum;

use crate::config::{DATE_PATTERN, DATE_TIME_PATTERN};

/// Fixed pattern a `created_at` value is rendered with on insert.
///
/// The rendered text is what the database parses, so `Date` drops the time
/// of day entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimestampFormat {
    /// `%m-%d-%Y`, e.g. `10-16-2026`
    Date,
    /// `%Y-%m-%d %H:%M:%S`, e.g. `2026-10-16 14:03:59`
    DateTime,
}

impl TimestampFormat {
    /// The strftime pattern for this format
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::Date => DATE_PATTERN,
            TimestampFormat::DateTime => DATE_TIME_PATTERN,
        }
    }

    /// Render a timestamp with this format
    pub fn format(&self, at: &NaiveDateTime) -> String {
        at.format(self.pattern()).to_string()
    }
}
