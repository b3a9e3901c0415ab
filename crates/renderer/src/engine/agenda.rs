// SPDX-License-Identifier: MIT

//!
//! The agenda (a chronological list grouped by month)
//!

use crate::{area_colour, colour::Colour};
use chrono::Datelike;
use serde::Serialize;
use yearwheel_core::{
    Area, CalendarEvent, Campus, EventId, EventType, INVALID_DATE_LABEL, format_display_date,
    format_month, short_month_name,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    pub event_id: EventId,
    pub title: String,
    pub description: String,

    /// e.g. `5. mai 2025 - 6. juni 2025`
    pub dates: String,

    /// The short month and day of the start (for the date badge)
    pub badge: Option<(String, u32)>,

    pub event_type: EventType,
    pub area: Area,
    pub campus: Vec<Campus>,
    pub colour: Colour,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaGroup {
    /// e.g. `mai 2025`
    pub label: String,
    pub entries: Vec<AgendaEntry>,
}

/// The display text for an event's dates (the end is only shown if it
/// differs from the start)
pub fn date_range_text(event: &CalendarEvent) -> String {
    let start = format_display_date(&event.start_date);
    if event.end_date == event.start_date {
        start
    } else {
        format!("{start} - {}", format_display_date(&event.end_date))
    }
}

/// Sort the events by start date and group them by month.  Events with an
/// invalid start date are grouped together under a fallback label.
pub fn layout_agenda(events: &[CalendarEvent]) -> Vec<AgendaGroup> {
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.start_date.cmp(&b.start_date));

    let mut groups: Vec<AgendaGroup> = Vec::new();
    for event in sorted {
        let start = event.start().ok();
        let label = start
            .map(format_month)
            .unwrap_or_else(|| INVALID_DATE_LABEL.to_string());

        let entry = AgendaEntry {
            event_id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            dates: date_range_text(event),
            badge: start.map(|date| (short_month_name(date.month()).to_string(), date.day())),
            event_type: event.event_type,
            area: event.area,
            campus: event.campus.clone(),
            colour: area_colour(event.area),
        };

        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.entries.push(entry),
            None => groups.push(AgendaGroup {
                label,
                entries: vec![entry],
            }),
        }
    }
    groups
}
