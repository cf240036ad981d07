//! Source of "today" for overdue checks and due labels.
//!
//! Classification never reads the wall clock itself; callers hold a [`Clock`]
//! and pass the resulting date down explicitly.

use crate::timezone::{today_in, today_local};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

pub trait Clock {
    /// The current calendar date, with no time-of-day component.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date, truncated to midnight in the local zone or in an
/// explicitly configured IANA zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Option<Tz>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { timezone: None }
    }

    pub fn in_timezone(timezone: Tz) -> Self {
        Self {
            timezone: Some(timezone),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        let now = Utc::now();
        match &self.timezone {
            Some(tz) => today_in(tz, now),
            None => today_local(now),
        }
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
