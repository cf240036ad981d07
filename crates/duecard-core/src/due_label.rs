//! Human-readable due date labels.
//!
//! Dates within a week of today get a relative phrase ("Due yesterday",
//! "Due in 3 days"); anything further away is shown as an absolute short
//! date such as "Due Feb 19, 2026".

use chrono::{DateTime, NaiveDate};

/// Width of the relative window on either side of today, in days.
pub const RELATIVE_WINDOW_DAYS: i64 = 7;

/// Parse a due date as sent by the backend.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose calendar date (in its
/// own offset) is used. Returns `None` for anything else.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Whole days from `due` to `today`: positive in the past, negative in the
/// future.
pub fn days_since(due: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(due).num_days()
}

struct Rule {
    applies: fn(i64) -> bool,
    label: fn(i64) -> String,
}

// Order matters: the first matching rule wins.
const RELATIVE_RULES: &[Rule] = &[
    Rule {
        applies: |diff| diff == 0,
        label: |_| "Due today".to_string(),
    },
    Rule {
        applies: |diff| diff == 1,
        label: |_| "Due yesterday".to_string(),
    },
    Rule {
        applies: |diff| diff > 1 && diff <= RELATIVE_WINDOW_DAYS,
        label: |diff| format!("Due {} days ago", diff),
    },
    Rule {
        applies: |diff| diff == -1,
        label: |_| "Due tomorrow".to_string(),
    },
    Rule {
        applies: |diff| diff < -1 && diff >= -RELATIVE_WINDOW_DAYS,
        label: |diff| format!("Due in {} days", diff.abs()),
    },
];

/// Label for a todo due on `due`, as seen on `today`.
pub fn due_label(due: NaiveDate, today: NaiveDate) -> String {
    let diff = days_since(due, today);
    RELATIVE_RULES
        .iter()
        .find(|rule| (rule.applies)(diff))
        .map(|rule| (rule.label)(diff))
        .unwrap_or_else(|| absolute_label(due))
}

/// Label for a raw due date string; `None` when the date is absent or
/// unparseable.
pub fn format_due_date(due_date: Option<&str>, today: NaiveDate) -> Option<String> {
    due_date
        .and_then(parse_due_date)
        .map(|due| due_label(due, today))
}

fn absolute_label(due: NaiveDate) -> String {
    due.format("Due %b %-d, %Y").to_string()
}
