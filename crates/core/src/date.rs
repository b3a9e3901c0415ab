// SPDX-License-Identifier: MIT

//!
//! Calendar dates and date intervals
//!
//! All dates are naive calendar dates (no time of day, no timezone).  Every
//! function here is total: malformed input is reported through a
//! [`DateError`] or degrades to a fallback value, it never panics.
//!

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The maximum number of days returned by [`days_in_interval`], however large
/// the requested span is
pub const MAX_DAYS_IN_INTERVAL: usize = 400;

/// Shown in place of a date when no date has been given
pub const NO_DATE_LABEL: &str = "Ingen dato";

/// Shown in place of a date when the given date cannot be parsed
pub const INVALID_DATE_LABEL: &str = "Ugyldig dato";

const MONTH_NAMES: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

const SHORT_MONTH_NAMES: [&str; 12] = [
    "jan.", "feb.", "mars", "apr.", "mai", "juni", "juli", "aug.", "sep.", "okt.", "nov.", "des.",
];

const SHORT_WEEKDAY_NAMES: [&str; 7] = ["man.", "tir.", "ons.", "tor.", "fre.", "lør.", "søn."];

/// Errors that can arise when parsing a `YYYY-MM-DD` date string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The string is empty
    #[error("No date given")]
    Empty,

    /// The string does not have exactly 3 dash-separated fields
    #[error("Date `{0}` must have the form YYYY-MM-DD")]
    InvalidFieldCount(String),

    /// One of the fields is not a number
    #[error("Date `{0}` has a non-numeric component")]
    NonNumeric(String),

    /// The fields are numeric but the date does not exist (e.g. month 13)
    #[error("Date `{0}` does not exist")]
    OutOfRange(String),
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// The year, month, and day are used directly, so there is never any
/// timezone drift.
pub fn parse_date(date: &str) -> Result<NaiveDate, DateError> {
    if date.is_empty() {
        return Err(DateError::Empty);
    }

    let fields: Vec<&str> = date.split('-').collect();
    let [year, month, day] = fields.as_slice() else {
        return Err(DateError::InvalidFieldCount(date.to_string()));
    };

    let non_numeric = || DateError::NonNumeric(date.to_string());
    let year = year.parse::<i32>().map_err(|_| non_numeric())?;
    let month = month.parse::<u32>().map_err(|_| non_numeric())?;
    let day = day.parse::<u32>().map_err(|_| non_numeric())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::OutOfRange(date.to_string()))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date (local calendar)
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The signed number of days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Whether the year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The number of days in the month (month must be 1 <= month <= 12)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Every day from the earlier to the later of the two dates (inclusive),
/// truncated to [`MAX_DAYS_IN_INTERVAL`] days.  The bounds may be given in
/// either order.
pub fn days_in_interval(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    Interval::new(start, end).days()
}

/// Whether an event (given by its raw date strings) overlaps the closed range.
///
/// True if the event starts or ends within the range, or starts before and
/// ends after it.  False if either event date cannot be parsed.
pub fn event_overlaps_interval(
    event_start: &str,
    event_end: &str,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> bool {
    match (parse_date(event_start), parse_date(event_end)) {
        (Ok(start), Ok(end)) => Interval::new(range_start, range_end).overlaps(start, end),
        _ => false,
    }
}

/// Long form display date (e.g. `5. mai 2025`).  Returns a fallback label for
/// empty or unparsable input.
pub fn format_display_date(date: &str) -> String {
    match parse_date(date) {
        Ok(date) => long_date(date),
        Err(DateError::Empty) => NO_DATE_LABEL.to_string(),
        Err(_) => INVALID_DATE_LABEL.to_string(),
    }
}

/// e.g. `5. mai 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!("{}. {} {}", date.day(), month_name(date.month()), date.year())
}

/// e.g. `mai 2025`
pub fn format_month(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// The full month name (e.g. `mai`).  Month must be 1 <= month <= 12, anything
/// else gives an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// The abbreviated month name (e.g. `jan.`)
pub fn short_month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| SHORT_MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// The abbreviated weekday name (e.g. `man.`)
pub fn short_weekday_name(date: NaiveDate) -> &'static str {
    SHORT_WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// A closed range of calendar days.  The start is never after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: NaiveDate,
    end: NaiveDate,
}

impl Interval {
    /// Create an interval from two dates given in either order
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The interval covering the calendar month that contains the date
    pub fn month_containing(date: NaiveDate) -> Option<Self> {
        let start = date.checked_sub_days(Days::new(u64::from(date.day0())))?;
        let length = days_in_month(date.year(), date.month());
        let end = start.checked_add_days(Days::new(u64::from(length - 1)))?;
        Some(Self { start, end })
    }

    /// The Monday to Sunday week that contains the date
    pub fn week_containing(date: NaiveDate) -> Option<Self> {
        let offset = date.weekday().num_days_from_monday();
        let start = date.checked_sub_days(Days::new(u64::from(offset)))?;
        let end = start.checked_add_days(Days::new(6))?;
        Some(Self { start, end })
    }

    /// The interval covering the whole calendar year
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The number of days in the interval (inclusive of both ends)
    pub fn len_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Whether the date falls within the interval (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the span `start..=end` overlaps the interval: either end lies
    /// within it, or the span fully covers it
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.contains(start) || self.contains(end) || (start < self.start && end > self.end)
    }

    /// Clip the span `start..=end` to the interval
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        (start.max(self.start), end.min(self.end))
    }

    /// Every day in the interval, truncated to [`MAX_DAYS_IN_INTERVAL`] days
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .take(MAX_DAYS_IN_INTERVAL)
            .collect()
    }
}
