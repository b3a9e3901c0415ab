// SPDX-License-Identifier: MIT

//!
//! The year wheel layout
//!
//! Each active area (one with at least one event) gets a ring, innermost
//! first, in the fixed area order.  Within its ring every event becomes either
//! a marker (deadlines and zero length events) or a sector.  An event with a
//! date that can't be parsed is skipped and recorded, and never stops the rest
//! of the wheel being laid out.
//!

use super::{clamp_angle, heading::month_markers};
use crate::{
    Dot, LineSegment, MonthMarker, Path, Point, TextOut, WheelColours, WheelLayoutParams,
    area_colour, area_dark_colour, colour::Colour, date_to_angle, donut_sector_path,
    polar_to_cartesian,
};
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;
use yearwheel_core::{Area, CalendarEvent, DateError, EventId, EventType};

/// The end angle used when drawing the ring backgrounds (a full annulus)
const RING_BACKGROUND_END_ANGLE: f64 = 359.99;

const CENTRE_TITLE_FONT_SIZE: f64 = 30.0;
const CENTRE_SUBTITLE_FONT_SIZE: f64 = 12.0;

/// Why an event could not be placed on the wheel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("invalid start date ({0})")]
    StartDate(DateError),

    #[error("invalid end date ({0})")]
    EndDate(DateError),

    #[error("year {0} can't be drawn")]
    Year(i32),
}

/// An event drawn on a ring
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WheelItem {
    /// A point in time, drawn as a dot at the ring's mid radius
    #[serde(rename_all = "camelCase")]
    Marker {
        event_id: EventId,
        title: String,
        angle: f64,
        dot: Dot,
    },

    /// A span of time, drawn as a donut sector filling the ring's width
    #[serde(rename_all = "camelCase")]
    Sector {
        event_id: EventId,
        title: String,
        start_angle: f64,
        end_angle: f64,
        path: Path,
        colour: Colour,
    },
}

impl WheelItem {
    pub fn event_id(&self) -> &EventId {
        match self {
            WheelItem::Marker { event_id, .. } | WheelItem::Sector { event_id, .. } => event_id,
        }
    }
}

/// One concentric ring (one per active area)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ring {
    pub area: Area,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub colour: Colour,
    pub background: Path,
    pub items: Vec<WheelItem>,
}

impl Ring {
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

/// The radial line marking today
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TodayMarker {
    pub date: NaiveDate,
    pub angle: f64,
    pub line: LineSegment,
    pub dot: Dot,
}

/// An event left off the wheel because it couldn't be placed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEvent {
    pub event_id: EventId,
    pub reason: String,
}

/// Everything needed to draw a year wheel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelLayout {
    pub year: i32,
    pub size: f64,
    pub centre: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub rings: Vec<Ring>,
    pub months: Vec<MonthMarker>,
    pub today: Option<TodayMarker>,
    pub centre_text: Vec<TextOut>,
    pub skipped: Vec<SkippedEvent>,
}

impl WheelLayout {
    /// Every item on the wheel, innermost ring first
    pub fn items(&self) -> impl Iterator<Item = &WheelItem> {
        self.rings.iter().flat_map(|ring| ring.items.iter())
    }

    /// The item drawn for the event (if it was drawn)
    pub fn item(&self, id: &EventId) -> Option<&WheelItem> {
        self.items().find(|item| item.event_id() == id)
    }
}

/// The areas with at least one event, in the fixed area order
pub fn active_areas(events: &[CalendarEvent]) -> Vec<Area> {
    Area::ALL
        .into_iter()
        .filter(|area| events.iter().any(|event| event.area == *area))
        .collect()
}

/// Lay out the year wheel for the events
pub fn layout_wheel(
    events: &[CalendarEvent],
    params: &WheelLayoutParams,
    colours: &WheelColours,
    today: NaiveDate,
) -> WheelLayout {
    let centre = params.centre();
    let areas = active_areas(events);
    let mut skipped = Vec::new();

    let rings = areas
        .iter()
        .enumerate()
        .map(|(index, area)| {
            let (inner_radius, outer_radius) = params.ring_radii(index, areas.len());
            let mut ring = Ring {
                area: *area,
                inner_radius,
                outer_radius,
                colour: area_colour(*area),
                background: donut_sector_path(
                    centre,
                    inner_radius,
                    outer_radius,
                    0.0,
                    RING_BACKGROUND_END_ANGLE,
                ),
                items: Vec::new(),
            };

            for event in events.iter().filter(|event| event.area == *area) {
                match place_event(event, &ring, params) {
                    Ok(Some(item)) => ring.items.push(item),
                    Ok(None) => debug!("Event {} is outside {}", event.id, params.year),
                    Err(error) => {
                        warn!("Skipping event {} on the wheel: {error}", event.id);
                        skipped.push(SkippedEvent {
                            event_id: event.id.clone(),
                            reason: error.to_string(),
                        });
                    }
                }
            }
            ring
        })
        .collect();

    WheelLayout {
        year: params.year,
        size: params.size,
        centre,
        inner_radius: params.inner_radius,
        outer_radius: params.outer_radius,
        rings,
        months: month_markers(params, colours),
        today: today_marker(today, params, colours),
        centre_text: centre_text(params, colours),
        skipped,
    }
}

/// Place one event on its ring.  `Ok(None)` if the event is entirely outside
/// the year.
fn place_event(
    event: &CalendarEvent,
    ring: &Ring,
    params: &WheelLayoutParams,
) -> Result<Option<WheelItem>, PlacementError> {
    let start = event.start().map_err(PlacementError::StartDate)?;
    let end = event.end().map_err(PlacementError::EndDate)?;

    if start.year() > params.year || end.year() < params.year {
        return Ok(None);
    }

    let angle = |date| date_to_angle(date, params.year).ok_or(PlacementError::Year(params.year));
    let raw_start_angle = angle(start)?;
    let raw_end_angle = angle(end)?;
    let start_angle = clamp_angle(raw_start_angle);
    let mut end_angle = clamp_angle(raw_end_angle);
    let centre = params.centre();

    // Decided before clamping, a span reaching in from another year is still a span
    if event.event_type == EventType::Deadline || raw_start_angle == raw_end_angle {
        return Ok(Some(WheelItem::Marker {
            event_id: event.id.clone(),
            title: event.title.clone(),
            angle: start_angle,
            dot: Dot {
                centre: polar_to_cartesian(centre, ring.mid_radius(), start_angle),
                radius: params.marker_radius,
                colour: area_dark_colour(ring.area),
            },
        }));
    }

    // No wrapping around the end of the year
    if end_angle < start_angle {
        end_angle = 360.0;
    }
    if end_angle - start_angle < params.min_sector_width {
        end_angle = start_angle + params.min_sector_width;
    }

    Ok(Some(WheelItem::Sector {
        event_id: event.id.clone(),
        title: event.title.clone(),
        start_angle,
        end_angle,
        path: donut_sector_path(
            centre,
            ring.inner_radius,
            ring.outer_radius,
            start_angle,
            end_angle,
        ),
        colour: area_dark_colour(ring.area),
    }))
}

/// The today marker (only if today is within the year)
fn today_marker(
    today: NaiveDate,
    params: &WheelLayoutParams,
    colours: &WheelColours,
) -> Option<TodayMarker> {
    if today.year() != params.year {
        return None;
    }
    let angle = date_to_angle(today, params.year)?;
    let centre = params.centre();
    let end = polar_to_cartesian(centre, params.outer_radius, angle);
    Some(TodayMarker {
        date: today,
        angle,
        line: LineSegment {
            start: polar_to_cartesian(centre, params.inner_radius, angle),
            end,
            style: colours.today,
        },
        dot: Dot {
            centre: end,
            radius: params.marker_radius,
            colour: colours.today.colour,
        },
    })
}

/// The year and a subtitle in the middle of the wheel
fn centre_text(params: &WheelLayoutParams, colours: &WheelColours) -> Vec<TextOut> {
    let centre = params.centre();
    vec![
        TextOut {
            position: Point::new(centre.x, centre.y - 10.0),
            text: params.year.to_string(),
            colour: colours.centre_title,
            font_size: CENTRE_TITLE_FONT_SIZE,
        },
        TextOut {
            position: Point::new(centre.x, centre.y + 15.0),
            text: "OVERSIKT".to_string(),
            colour: colours.centre_subtitle,
            font_size: CENTRE_SUBTITLE_FONT_SIZE,
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use yearwheel_macros::ymd;

    fn event(id: &str, area: Area, event_type: EventType, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent::new(EventId::from(id).unwrap(), id, start, end, event_type, area)
    }

    fn layout(events: &[CalendarEvent]) -> WheelLayout {
        layout_wheel(
            events,
            &WheelLayoutParams::default(),
            &WheelColours::default(),
            ymd!(2025, 3, 1),
        )
    }

    fn id(id: &str) -> EventId {
        EventId::from(id).unwrap()
    }

    #[test]
    fn exam_period_and_admission_deadline() {
        let events = vec![
            event("a", Area::Eksamen, EventType::Period, "2025-05-05", "2025-06-06"),
            event("b", Area::Opptak, EventType::Deadline, "2025-04-15", "2025-04-15"),
        ];
        let wheel = layout(&events);

        // Two rings, in area order (not event order)
        let areas: Vec<Area> = wheel.rings.iter().map(|ring| ring.area).collect();
        assert_eq!(areas, vec![Area::Opptak, Area::Eksamen]);
        assert!(wheel.skipped.is_empty());

        // b: 104 days into 2025, at the Opptak ring's mid radius
        let Some(WheelItem::Marker { angle, dot, .. }) = wheel.item(&id("b")) else {
            panic!("b should be a marker");
        };
        assert!((angle - 104.0 / 365.0 * 360.0).abs() < 1e-9);
        assert!((angle - 102.58).abs() < 0.01);
        let expected = polar_to_cartesian(wheel.centre, wheel.rings[0].mid_radius(), *angle);
        assert!(dot.centre.distance_to(expected) < 1e-9);

        // a: 5th May (day 124) to 6th June (day 156)
        let Some(WheelItem::Sector {
            start_angle,
            end_angle,
            ..
        }) = wheel.item(&id("a"))
        else {
            panic!("a should be a sector");
        };
        assert!((start_angle - 124.0 / 365.0 * 360.0).abs() < 1e-9);
        assert!((end_angle - 156.0 / 365.0 * 360.0).abs() < 1e-9);
        assert!((start_angle - 122.30).abs() < 0.01);
        assert!((end_angle - 153.86).abs() < 0.01);
    }

    #[test]
    fn malformed_dates_are_skipped() {
        let events = vec![
            event("bad", Area::Eksamen, EventType::Period, "2025-13-40", "2025-06-06"),
            event("good", Area::Eksamen, EventType::Period, "2025-05-05", "2025-06-06"),
            event("empty", Area::Annet, EventType::Event, "2025-05-05", ""),
        ];
        let wheel = layout(&events);

        assert_eq!(wheel.skipped.len(), 2);
        assert_eq!(wheel.skipped[0].event_id, id("bad"));
        assert!(wheel.skipped[0].reason.contains("start date"));
        assert_eq!(wheel.skipped[1].event_id, id("empty"));
        assert!(wheel.item(&id("good")).is_some());
        assert!(wheel.item(&id("bad")).is_none());

        // The areas still have rings
        assert_eq!(wheel.rings.len(), 2);
    }

    #[test]
    fn events_outside_the_year() {
        let events = vec![
            event("before", Area::Opptak, EventType::Period, "2024-01-01", "2024-12-31"),
            event("after", Area::Opptak, EventType::Period, "2026-01-01", "2026-02-01"),
            event("over-new-year", Area::Opptak, EventType::Period, "2025-12-01", "2026-01-31"),
            event("from-last-year", Area::Opptak, EventType::Period, "2024-12-01", "2025-01-31"),
        ];
        let wheel = layout(&events);

        assert!(wheel.item(&id("before")).is_none());
        assert!(wheel.item(&id("after")).is_none());
        assert!(wheel.skipped.is_empty());

        let Some(WheelItem::Sector { end_angle, .. }) = wheel.item(&id("over-new-year")) else {
            panic!("should be a sector");
        };
        assert_eq!(*end_angle, 360.0);

        let Some(WheelItem::Sector { start_angle, .. }) = wheel.item(&id("from-last-year")) else {
            panic!("should be a sector");
        };
        assert_eq!(*start_angle, 0.0);
    }

    #[test]
    fn period_ending_on_new_year_is_a_sector() {
        let events = vec![
            event("p", Area::Opptak, EventType::Period, "2024-06-01", "2025-01-01"),
            event("d", Area::Opptak, EventType::Deadline, "2025-01-01", "2025-01-01"),
        ];
        let wheel = layout(&events);

        let Some(WheelItem::Sector {
            start_angle,
            end_angle,
            ..
        }) = wheel.item(&id("p"))
        else {
            panic!("p should be a sector");
        };
        assert_eq!(*start_angle, 0.0);
        assert_eq!(*end_angle, WheelLayoutParams::default().min_sector_width);

        let Some(WheelItem::Marker { angle, .. }) = wheel.item(&id("d")) else {
            panic!("d should be a marker");
        };
        assert_eq!(*angle, 0.0);
    }

    #[test]
    fn reversed_and_short_events() {
        let events = vec![
            event("reversed", Area::Annet, EventType::Period, "2025-06-01", "2025-03-01"),
            event("one-day", Area::Annet, EventType::Event, "2025-06-01", "2025-06-01"),
            event("two-days", Area::Annet, EventType::Event, "2025-06-01", "2025-06-02"),
        ];
        let wheel = layout(&events);

        let Some(WheelItem::Sector { end_angle, .. }) = wheel.item(&id("reversed")) else {
            panic!("should be a sector");
        };
        assert_eq!(*end_angle, 360.0);

        // Same start and end is a point in time
        assert!(matches!(
            wheel.item(&id("one-day")),
            Some(WheelItem::Marker { .. })
        ));

        // A single day is just under 1°
        let Some(WheelItem::Sector {
            start_angle,
            end_angle,
            ..
        }) = wheel.item(&id("two-days"))
        else {
            panic!("should be a sector");
        };
        assert!(end_angle - start_angle >= 0.5);
    }

    #[test]
    fn min_sector_width() {
        let params = WheelLayoutParams {
            min_sector_width: 5.0,
            ..Default::default()
        };
        let events = vec![event(
            "short",
            Area::Annet,
            EventType::Event,
            "2025-06-01",
            "2025-06-02",
        )];
        let wheel = layout_wheel(&events, &params, &WheelColours::default(), ymd!(2025, 1, 1));
        let Some(WheelItem::Sector {
            start_angle,
            end_angle,
            ..
        }) = wheel.item(&id("short"))
        else {
            panic!("should be a sector");
        };
        assert!((end_angle - start_angle - 5.0).abs() < 1e-9);
    }

    #[test]
    fn today() {
        let wheel = layout(&[]);
        assert!(wheel.rings.is_empty());
        assert_eq!(wheel.months.len(), 12);
        let today = wheel.today.unwrap();
        assert_eq!(today.date, ymd!(2025, 3, 1));
        assert!((today.angle - 59.0 / 365.0 * 360.0).abs() < 1e-9);

        let wheel = layout_wheel(
            &[],
            &WheelLayoutParams::default(),
            &WheelColours::default(),
            ymd!(2026, 3, 1),
        );
        assert!(wheel.today.is_none());
    }

    #[test]
    fn seven_rings_fit() {
        let events: Vec<CalendarEvent> = Area::ALL
            .iter()
            .map(|area| event(area.as_str(), *area, EventType::Deadline, "2025-02-01", "2025-02-01"))
            .collect();
        let wheel = layout(&events);
        assert_eq!(wheel.rings.len(), 7);
        for pair in wheel.rings.windows(2) {
            assert!(pair[0].outer_radius < pair[1].inner_radius);
        }
        assert!(wheel.rings[6].outer_radius <= 380.0);
    }

    #[test]
    fn json() {
        let events = vec![event(
            "b",
            Area::Opptak,
            EventType::Deadline,
            "2025-04-15",
            "2025-04-15",
        )];
        let json = serde_json::to_value(layout(&events)).unwrap();
        assert_eq!(json["rings"][0]["area"], "Opptak");
        assert_eq!(json["rings"][0]["items"][0]["kind"], "marker");
        assert_eq!(json["rings"][0]["items"][0]["eventId"], "b");
        assert!(json["rings"][0]["background"].as_str().unwrap().starts_with("M "));
    }
}
