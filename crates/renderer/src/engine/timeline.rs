// SPDX-License-Identifier: MIT

//!
//! The timeline (swim lane) layout
//!
//! The visible range is split into one column per day, and each area with
//! events in the range gets a lane.  Events are clipped to the range and
//! positioned by their first column and the number of columns they span.
//!

use crate::{Navigator, ZoomLevel, area_colour, colour::Colour};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use yearwheel_core::{
    Area, CalendarEvent, EventId, EventType, Interval, days_between, short_weekday_name,
};

/// A day heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    pub date: NaiveDate,

    /// e.g. `man.`
    pub weekday: String,

    /// Day of the month
    pub day: u32,

    pub is_today: bool,
}

/// An event's position in a lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneItem {
    pub event_id: EventId,
    pub title: String,

    /// The index of the first column (0 is the first visible day)
    pub column_start: usize,

    /// The number of columns covered (at least 1)
    pub column_span: usize,

    /// Single day deadlines are drawn as a marker rather than a bar
    pub is_marker: bool,

    pub colour: Colour,
}

/// All events of one area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    pub area: Area,
    pub colour: Colour,
    pub items: Vec<LaneItem>,
}

/// Everything needed to draw the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub title: String,
    pub zoom: ZoomLevel,
    pub range: Interval,
    pub days: Vec<DayColumn>,
    pub lanes: Vec<Lane>,
}

impl TimelineLayout {
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// The column start and span of an event clipped to the range
pub fn lane_position(range: &Interval, start: NaiveDate, end: NaiveDate) -> (usize, usize) {
    let (clipped_start, clipped_end) = range.clip(start, end);
    let column_start = days_between(range.start(), clipped_start).max(0);
    let column_span = (days_between(clipped_start, clipped_end) + 1).max(1);
    (column_start as usize, column_span as usize)
}

/// Lay out the events visible in the navigator's range
pub fn layout_timeline(events: &[CalendarEvent], navigator: &Navigator) -> TimelineLayout {
    let range = navigator.visible_range();

    let days = range
        .days()
        .into_iter()
        .map(|date| DayColumn {
            date,
            weekday: short_weekday_name(date).to_string(),
            day: date.day(),
            is_today: date == navigator.today(),
        })
        .collect();

    let visible: Vec<(&CalendarEvent, NaiveDate, NaiveDate)> = events
        .iter()
        .filter(|event| event.overlaps(&range))
        .filter_map(|event| {
            let (start, end) = event.dates().ok()?;
            Some((event, start, end))
        })
        .collect();

    let lanes = Area::ALL
        .into_iter()
        .filter_map(|area| {
            let items: Vec<LaneItem> = visible
                .iter()
                .filter(|(event, _, _)| event.area == area)
                .map(|(event, start, end)| {
                    let (column_start, column_span) = lane_position(&range, *start, *end);
                    LaneItem {
                        event_id: event.id.clone(),
                        title: event.title.clone(),
                        column_start,
                        column_span,
                        is_marker: event.event_type == EventType::Deadline && start == end,
                        colour: area_colour(area),
                    }
                })
                .collect();
            (!items.is_empty()).then(|| Lane {
                area,
                colour: area_colour(area),
                items,
            })
        })
        .collect();

    TimelineLayout {
        title: navigator.title(),
        zoom: navigator.zoom(),
        range,
        days,
        lanes,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use yearwheel_macros::ymd;

    fn event(id: &str, area: Area, event_type: EventType, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent::new(EventId::from(id).unwrap(), id, start, end, event_type, area)
    }

    fn january() -> Navigator {
        Navigator::new(ymd!(2025, 1, 15), ZoomLevel::Month).with_today(ymd!(2025, 1, 20))
    }

    #[test]
    fn positions() {
        let range = Interval::new(ymd!(2025, 3, 1), ymd!(2025, 3, 31));

        // Inside
        assert_eq!(lane_position(&range, ymd!(2025, 3, 10), ymd!(2025, 3, 20)), (9, 11));

        // Starting before
        assert_eq!(lane_position(&range, ymd!(2025, 2, 1), ymd!(2025, 3, 3)), (0, 3));

        // Ending after
        assert_eq!(lane_position(&range, ymd!(2025, 3, 30), ymd!(2025, 5, 1)), (29, 2));

        // Covering
        assert_eq!(lane_position(&range, ymd!(2025, 1, 1), ymd!(2025, 12, 31)), (0, 31));

        // Reversed dates still take a column
        assert_eq!(lane_position(&range, ymd!(2025, 3, 10), ymd!(2025, 3, 5)), (9, 1));
    }

    #[test]
    fn month() {
        let events = vec![
            event("exam", Area::Eksamen, EventType::Period, "2024-12-01", "2025-01-10"),
            event("deadline", Area::Opptak, EventType::Deadline, "2025-01-15", "2025-01-15"),
            event("later", Area::Opptak, EventType::Event, "2025-02-01", "2025-02-05"),
            event("broken", Area::Opptak, EventType::Event, "2025-01-xx", "2025-01-05"),
        ];
        let timeline = layout_timeline(&events, &january());

        assert_eq!(timeline.title, "januar 2025");
        assert_eq!(timeline.days.len(), 31);
        assert_eq!(timeline.days[0].weekday, "ons.");
        assert!(timeline.days[19].is_today);
        assert_eq!(timeline.days.iter().filter(|day| day.is_today).count(), 1);

        // Lanes in area order, only for areas with visible events
        let areas: Vec<Area> = timeline.lanes.iter().map(|lane| lane.area).collect();
        assert_eq!(areas, vec![Area::Opptak, Area::Eksamen]);

        let opptak = &timeline.lanes[0].items;
        assert_eq!(opptak.len(), 1);
        assert_eq!(opptak[0].column_start, 14);
        assert_eq!(opptak[0].column_span, 1);
        assert!(opptak[0].is_marker);

        let exam = &timeline.lanes[1].items[0];
        assert_eq!((exam.column_start, exam.column_span), (0, 10));
        assert!(!exam.is_marker);
    }

    #[test]
    fn week() {
        let events = vec![event(
            "period",
            Area::Annet,
            EventType::Period,
            "2025-01-01",
            "2025-03-01",
        )];
        let navigator =
            Navigator::new(ymd!(2025, 1, 15), ZoomLevel::Week).with_today(ymd!(2025, 6, 1));
        let timeline = layout_timeline(&events, &navigator);

        assert_eq!(timeline.days.len(), 7);
        assert_eq!(timeline.days[0].weekday, "man.");
        assert_eq!(timeline.days[0].day, 13);
        assert!(timeline.days.iter().all(|day| !day.is_today));
        let item = &timeline.lanes[0].items[0];
        assert_eq!((item.column_start, item.column_span), (0, 7));
    }

    #[test]
    fn nothing_visible() {
        let timeline = layout_timeline(&[], &january());
        assert!(timeline.is_empty());
        assert_eq!(timeline.days.len(), 31);
    }
}
