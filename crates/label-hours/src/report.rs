//! Render weekday totals for people and for scripts.

use chrono::Duration;
use serde::Serialize;

use crate::durations::{weekday_name, WorkDurations};

const HEADER: &str = "Day       | Hours";
const RULE: &str = "-----------------";

/// One weekday's total, in canonical weekday order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub day: &'static str,
    pub seconds: i64,
    /// Whole hours, truncated.
    pub hours: i64,
    /// Whole minutes past the hour, truncated.
    pub minutes: i64,
}

impl ReportRow {
    fn new(day: &'static str, duration: Duration) -> Self {
        let seconds = duration.num_seconds();
        Self {
            day,
            seconds,
            hours: seconds / 3600,
            minutes: (seconds % 3600) / 60,
        }
    }
}

/// Rows for every weekday with recorded time, Monday first.
pub fn report_rows(durations: &WorkDurations) -> Vec<ReportRow> {
    durations
        .sorted()
        .into_iter()
        .map(|(day, duration)| ReportRow::new(weekday_name(day), duration))
        .collect()
}

/// Format a duration as `"<H>h <M>m"`, truncating seconds.
pub fn format_hours_minutes(duration: Duration) -> String {
    let row = ReportRow::new("", duration);
    format!("{}h {}m", row.hours, row.minutes)
}

/// The two-column text table, one line per weekday, newline-terminated.
pub fn render_table(durations: &WorkDurations) -> String {
    let mut out = format!("{HEADER}\n{RULE}\n");
    for row in report_rows(durations) {
        out.push_str(&format!("{:<9} | {}h {}m\n", row.day, row.hours, row.minutes));
    }
    out
}

/// The same rows as a pretty-printed JSON array.
pub fn render_json(durations: &WorkDurations) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report_rows(durations))
}
