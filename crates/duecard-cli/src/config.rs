use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use duecard_core::clock::{Clock, FixedClock, SystemClock};
use duecard_core::due_label::parse_due_date;
use duecard_core::models::TodoFilter;
use duecard_core::timezone::validate_timezone;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the todo list
    pub store_path: PathBuf,
    /// IANA timezone used to decide what "today" is
    pub timezone: Option<String>,
    /// Fixed reference date (YYYY-MM-DD); the wall clock is used when unset
    pub today: Option<String>,
    /// Filter applied by `list` when no flag is given
    pub default_filter: TodoFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("todos.json"),
            timezone: None,
            today: None,
            default_filter: TodoFilter::All,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("duecard.toml"))
            .merge(Env::prefixed("DUECARD_"))
            .extract()
    }

    /// Resolve "today": an explicit override wins, then the configured fixed
    /// date, then the wall clock in the configured (or detected) timezone.
    pub fn reference_date(&self, override_date: Option<&str>) -> Result<NaiveDate> {
        if let Some(raw) = override_date.or(self.today.as_deref()) {
            let date = parse_due_date(raw)
                .ok_or_else(|| anyhow!("Invalid reference date '{}'. Use YYYY-MM-DD", raw))?;
            return Ok(FixedClock(date).today());
        }
        Ok(self.system_clock()?.today())
    }

    fn system_clock(&self) -> Result<SystemClock> {
        match &self.timezone {
            Some(name) => Ok(SystemClock::in_timezone(validate_timezone(name)?)),
            None => Ok(detect_system_timezone()
                .and_then(|name| validate_timezone(&name).ok())
                .map(SystemClock::in_timezone)
                .unwrap_or_else(SystemClock::local)),
        }
    }
}

/// Detects the system timezone; `None` leaves the decision to the local zone
pub fn detect_system_timezone() -> Option<String> {
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && validate_timezone(&tz).is_ok() {
            return Some(tz);
        }
    }

    iana_time_zone::get_timezone()
        .ok()
        .filter(|tz| validate_timezone(tz).is_ok())
}
