// SPDX-License-Identifier: MIT

//!
//! Month headings around the wheel
//!

use crate::{
    LineSegment, TextOut, WheelColours, WheelLayoutParams, date_to_angle, polar_to_cartesian,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;
use yearwheel_core::short_month_name;

const MONTH_LABEL_FONT_SIZE: f64 = 10.0;

/// Information needed to draw a month's separator and label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthMarker {
    /// 1 to 12
    pub month: u32,

    /// The angle of the first day of the month
    pub angle: f64,

    /// The radial line at the start of the month
    pub separator: LineSegment,

    /// The label, placed midway through the month
    pub label: TextOut,
}

/// The 12 month markers for the wheel (empty if the year is out of range)
pub(crate) fn month_markers(params: &WheelLayoutParams, colours: &WheelColours) -> Vec<MonthMarker> {
    let centre = params.centre();
    let first_of = |month: u32| {
        let (year, month) = if month > 12 {
            (params.year.checked_add(1)?, 1)
        } else {
            (params.year, month)
        };
        date_to_angle(NaiveDate::from_ymd_opt(year, month, 1)?, params.year)
    };

    (1..=12)
        .filter_map(|month| {
            let angle = first_of(month)?;
            let next_angle = first_of(month + 1)?;
            let mid_angle = (angle + next_angle) / 2.0;
            Some(MonthMarker {
                month,
                angle,
                separator: LineSegment {
                    start: polar_to_cartesian(centre, params.inner_radius, angle),
                    end: polar_to_cartesian(centre, params.outer_radius, angle),
                    style: colours.month_separator,
                },
                label: TextOut {
                    position: polar_to_cartesian(
                        centre,
                        params.outer_radius + params.label_offset,
                        mid_angle,
                    ),
                    text: short_month_name(month).to_uppercase(),
                    colour: colours.month_label,
                    font_size: MONTH_LABEL_FONT_SIZE,
                },
            })
        })
        .collect()
}
