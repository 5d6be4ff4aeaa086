//! Summary report rendering
//!
//! Text for humans, JSON for machine parsing.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::summary::TraceSummary;

/// JSON shape of the summary report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Accumulated total in nanoseconds
    pub total_nanos: u64,
    /// Canonical human rendering of the total
    pub human: String,
    /// Whole hours in the total
    pub hours: u64,
    /// Leftover minutes (0-59)
    pub minutes: u64,
    /// Leftover seconds (0-59)
    pub seconds: u64,
    /// Total expressed as decimal minutes
    pub total_minutes: f64,
    pub rows_summed: u64,
    pub rows_skipped: u64,
}

impl From<&TraceSummary> for JsonSummary {
    fn from(summary: &TraceSummary) -> Self {
        let (hours, minutes, seconds) = summary.total.split_hms();
        JsonSummary {
            total_nanos: summary.total.as_nanos(),
            human: summary.total.to_string(),
            hours,
            minutes,
            seconds,
            total_minutes: summary.total.as_minutes_f64(),
            rows_summed: summary.rows_summed,
            rows_skipped: summary.rows_skipped,
        }
    }
}

/// Render the text report printed to stdout
pub fn render_text(summary: &TraceSummary) -> String {
    let (hours, minutes, seconds) = summary.total.split_hms();

    let mut out = String::new();
    let _ = writeln!(out, "Total duration: {}", summary.total);
    let _ = writeln!(out, "Total duration: {}h {}m {}s", hours, minutes, seconds);
    let _ = writeln!(out, "Total minutes: {:.2}", summary.total.as_minutes_f64());
    if summary.rows_skipped > 0 {
        let _ = writeln!(
            out,
            "Rows summed: {} ({} skipped)",
            summary.rows_summed, summary.rows_skipped
        );
    }
    out
}

/// Render the summary as pretty-printed JSON
pub fn render_json(summary: &TraceSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonSummary::from(summary))
}
