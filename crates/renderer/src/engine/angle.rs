// SPDX-License-Identifier: MIT

//!
//! Mapping dates onto the wheel
//!

use chrono::NaiveDate;

/// The angle (degrees) of the date on the wheel for the year: the fraction of
/// the year that has elapsed at the start of the date, times 360.  The span of
/// the year is measured, so leap years are handled.
///
/// Dates outside the year give angles below 0 or of 360 and above.  `None`
/// only if the year is outside the supported range.
pub fn date_to_angle(date: NaiveDate, year: i32) -> Option<f64> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
    let elapsed = (date - start).num_milliseconds() as f64;
    let span = (end - start).num_milliseconds() as f64;
    Some(elapsed / span * 360.0)
}
