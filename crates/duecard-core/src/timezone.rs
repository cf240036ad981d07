use crate::error::CoreError;
use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Validate IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone)
        .map_err(|_| CoreError::InvalidTimezone(format!("Invalid timezone: {}", timezone)))
}

/// Calendar date of `at_time` as seen in `timezone`
pub fn today_in(timezone: &Tz, at_time: DateTime<Utc>) -> NaiveDate {
    at_time.with_timezone(timezone).date_naive()
}

/// Calendar date of `at_time` in the machine's local zone
pub fn today_local(at_time: DateTime<Utc>) -> NaiveDate {
    at_time.with_timezone(&Local).date_naive()
}
