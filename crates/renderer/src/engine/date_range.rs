// SPDX-License-Identifier: MIT

//!
//! The timeline's visible date range and navigation between ranges
//!

use chrono::{Datelike, Days, Months, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use yearwheel_core::{Interval, format_month, short_month_name, today};

/// How much of the calendar the timeline shows at once
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomLevel {
    #[default]
    #[display("month")]
    Month,

    /// Monday to Sunday
    #[display("week")]
    Week,
}

impl ZoomLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "month" | "måned" => Some(ZoomLevel::Month),
            "week" | "uke" => Some(ZoomLevel::Week),
            _ => None,
        }
    }
}

/// Holds the date the timeline is centred on and the zoom level, and moves
/// between months/weeks.  Any date arithmetic that fails falls back to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: NaiveDate,
    zoom: ZoomLevel,
    today: NaiveDate,
}

impl Navigator {
    pub fn new(current: NaiveDate, zoom: ZoomLevel) -> Self {
        Self {
            current,
            zoom,
            today: today(),
        }
    }

    /// Use a fixed "today" (instead of the system date)
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
    }

    /// Move back one month or week
    pub fn previous(&mut self) {
        let moved = match self.zoom {
            ZoomLevel::Month => self.current.checked_sub_months(Months::new(1)),
            ZoomLevel::Week => self.current.checked_sub_days(Days::new(7)),
        };
        self.current = self.or_today(moved);
    }

    /// Move forward one month or week
    pub fn next(&mut self) {
        let moved = match self.zoom {
            ZoomLevel::Month => self.current.checked_add_months(Months::new(1)),
            ZoomLevel::Week => self.current.checked_add_days(Days::new(7)),
        };
        self.current = self.or_today(moved);
    }

    /// Jump back to today
    pub fn go_to_today(&mut self) {
        self.current = self.today;
    }

    fn or_today(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or_else(|| {
            warn!("Can't move the timeline from {}, using today", self.current);
            self.today
        })
    }

    /// The range of days shown (the month or week containing the current date)
    pub fn visible_range(&self) -> Interval {
        let range = match self.zoom {
            ZoomLevel::Month => Interval::month_containing(self.current),
            ZoomLevel::Week => Interval::week_containing(self.current),
        };
        range.unwrap_or_else(|| {
            warn!("No {} range around {}, using today", self.zoom, self.current);
            Interval::new(self.today, self.today)
        })
    }

    /// The heading (e.g. `januar 2025` or `Uke 3, jan.`)
    pub fn title(&self) -> String {
        match self.zoom {
            ZoomLevel::Month => format_month(self.current),
            ZoomLevel::Week => format!(
                "Uke {}, {}",
                self.current.iso_week().week(),
                short_month_name(self.current.month())
            ),
        }
    }
}
