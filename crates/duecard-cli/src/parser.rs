use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};
use duecard_core::due_label::parse_due_date as parse_iso_date;

/// Parse a due date given on the command line. ISO dates are taken as-is;
/// anything else goes through natural-language parsing relative to `today`.
pub fn parse_due_date(date_str: &str, today: NaiveDate) -> Result<NaiveDate> {
    if let Some(date) = parse_iso_date(date_str) {
        return Ok(date);
    }
    let noon = today
        .and_hms_opt(12, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt))
        .ok_or_else(|| anyhow::anyhow!("Invalid reference date {}", today))?;
    parse_date_string(date_str, noon, Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse due date '{}': {}", date_str, e))
}

/// Turn user input into the `YYYY-MM-DD` text an edit form expects. Input
/// that cannot be parsed is passed through so the form reports it.
pub fn normalize_due_input(date_str: &str, today: NaiveDate) -> String {
    parse_due_date(date_str, today)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| date_str.to_string())
}
