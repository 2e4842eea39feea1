//! Play periods based on ISO-8601 calendar weeks
//!
//! Weeks start on Monday and week 1 is the week that contains the year's
//! first Thursday. Every date therefore belongs to exactly one
//! (ISO year, week) pair, and the ISO year can differ from the calendar year
//! around New Year.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// One play period: an ISO week of an ISO year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayPeriod {
    year: i32,
    week: u32,
}

impl PlayPeriod {
    /// The period containing `date`
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        let (year, week) = iso_week(date);
        Self { year, week }
    }

    /// ISO year the week belongs to
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// ISO week number (1-53)
    #[must_use]
    pub const fn week(self) -> u32 {
        self.week
    }

    /// Short label used in share text, e.g. "KW 5"
    #[must_use]
    pub fn label(self) -> String {
        format!("KW {}", self.week)
    }
}

impl fmt::Display for PlayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// ISO-8601 (year, week) of a date
///
/// Moves the date to the Thursday of its Monday-based week. That Thursday's
/// year is the ISO year, and its zero-based day of year divided by seven gives
/// the zero-based week.
#[must_use]
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    let mut year = date.year();
    // 1-based day of year of the Thursday, possibly outside this year
    let mut thursday = i64::from(date.ordinal()) + 3 - weekday;

    if thursday < 1 {
        year -= 1;
        thursday += days_in_year(year);
    } else if thursday > days_in_year(year) {
        thursday -= days_in_year(year);
        year += 1;
    }

    let week = (thursday - 1) / 7 + 1;
    (year, week as u32)
}

fn days_in_year(year: i32) -> i64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}
