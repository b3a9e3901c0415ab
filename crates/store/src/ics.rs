// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Calendar (ICS) export
//!

use chrono::{DateTime, Days, NaiveDate, Utc};
use icalendar::{Calendar, Component, Property, ValueType};
use log::{debug, warn};
use yearwheel_core::CalendarEvent;

/// The product identifier of exported calendars
pub const PRODID: &str = "-//NTNU//Arshjul//NO";

/// The domain appended to event ids to make calendar UIDs
pub const UID_DOMAIN: &str = "ntnu.no";

/// All events as an all-day calendar (events with invalid dates are left
/// out)
pub fn events_to_ics(events: &[CalendarEvent]) -> String {
    events_to_ics_at(events, Utc::now())
}

/// As [`events_to_ics`], with the given time as the `DTSTAMP`
pub fn events_to_ics_at(events: &[CalendarEvent], now: DateTime<Utc>) -> String {
    let dtstamp = now.format("%Y%m%dT%H%M%SZ").to_string();
    let mut calendar = Calendar::new();
    let mut exported = 0;

    for event in events {
        let (start, end) = match event.dates() {
            Ok(dates) => dates,
            Err(error) => {
                warn!("Not exporting event {} ({error})", event.id);
                continue;
            }
        };

        // All-day events end at the start of the day after
        let Some(exclusive_end) = end.checked_add_days(Days::new(1)) else {
            warn!("Not exporting event {} (end date out of range)", event.id);
            continue;
        };

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@{UID_DOMAIN}", event.id));
        ics_event.add_property("DTSTAMP", &dtstamp);
        add_date_property(&mut ics_event, "DTSTART", start);
        add_date_property(&mut ics_event, "DTEND", exclusive_end);
        ics_event.summary(&event.title);
        ics_event.description(&event.description);
        ics_event.add_property("CATEGORIES", event.area.as_str());
        calendar.push(ics_event.done());
        exported += 1;
    }

    let calendar = calendar.done();
    debug!("Exported {exported} of {} events", events.len());
    set_calendar_properties(&calendar.to_string())
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut property = Property::new(name, date.format("%Y%m%d").to_string());
    property.append_parameter(ValueType::Date);
    ics_event.append_property(property);
}

/// Use our product identifier, and mark the calendar as published
fn set_calendar_properties(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{PRODID}\r\n"));
            result.push_str("METHOD:PUBLISH\r\n");
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use yearwheel_core::{Area, EventId, EventType};

    fn event(id: &str, start: &str, end: &str) -> CalendarEvent {
        let mut event = CalendarEvent::new(
            EventId::from(id).unwrap(),
            "Eksamensperiode",
            start,
            end,
            EventType::Period,
            Area::Eksamen,
        );
        event.description = "Skoleeksamen".to_string();
        event
    }

    #[test]
    fn calendar() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap();
        let ics = events_to_ics_at(
            &[
                event("exam", "2025-05-05", "2025-06-06"),
                event("broken", "2025-05-xx", "2025-06-06"),
                event("newyear", "2025-12-31", "2025-12-31"),
            ],
            now,
        );
        let lines: Vec<&str> = ics.lines().collect();

        assert_eq!(lines.first(), Some(&"BEGIN:VCALENDAR"));
        assert_eq!(lines.last(), Some(&"END:VCALENDAR"));
        assert!(lines.contains(&"PRODID:-//NTNU//Arshjul//NO"));
        assert!(lines.contains(&"METHOD:PUBLISH"));
        assert!(lines.contains(&"VERSION:2.0"));
        assert_eq!(lines.iter().filter(|line| line.starts_with("PRODID")).count(), 1);

        // The broken event is skipped
        assert_eq!(lines.iter().filter(|line| **line == "BEGIN:VEVENT").count(), 2);
        assert!(!ics.contains("broken@ntnu.no"));

        assert!(lines.contains(&"UID:exam@ntnu.no"));
        assert!(lines.contains(&"DTSTAMP:20250115T083000Z"));
        assert!(lines.contains(&"DTSTART;VALUE=DATE:20250505"));
        assert!(lines.contains(&"SUMMARY:Eksamensperiode"));
        assert!(lines.contains(&"DESCRIPTION:Skoleeksamen"));
        assert!(lines.contains(&"CATEGORIES:Eksamen"));

        // Exclusive ends
        assert!(lines.contains(&"DTEND;VALUE=DATE:20250607"));
        assert!(lines.contains(&"DTEND;VALUE=DATE:20260101"));
    }

    #[test]
    fn text_is_escaped() {
        let mut event = event("escaped", "2025-05-05", "2025-05-05");
        event.title = "A, B; C".to_string();
        event.description = "line one\nline two, with comma; semi".to_string();
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap();
        let ics = events_to_ics_at(&[event], now);
        let lines: Vec<&str> = ics.lines().collect();

        assert!(lines.contains(&r"SUMMARY:A\, B\; C"));
        assert!(lines.contains(&r"DESCRIPTION:line one\nline two\, with comma\; semi"));
    }

    #[test]
    fn empty() {
        let ics = events_to_ics(&[]);
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
