// SPDX-License-Identifier: MIT

//!
//! The plain text frontend (for terminals)
//!

use crate::{AgendaGroup, Engine, Navigator, TimelineLayout};
use log::debug;
use yearwheel_core::{CalendarEvent, Campus};

/// Shown when there is nothing to list
pub const NO_EVENTS_TEXT: &str = "Ingen hendelser funnet for de valgte filtrene.";

/// The width of each day column in the timeline
const COLUMN_WIDTH: usize = 4;

/// The plain text renderer for the agenda and timeline
pub struct YearWheelRendererText {
    /// The underlying [`Engine`].
    engine: Engine,
}

impl Default for YearWheelRendererText {
    fn default() -> Self {
        Self::new()
    }
}

impl YearWheelRendererText {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        self.engine.set_events(events);
    }

    pub fn set_today(&mut self, today: chrono::NaiveDate) {
        self.engine.set_today(today);
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn agenda(&self) -> String {
        draw_agenda(&self.engine.agenda())
    }

    pub fn timeline(&self, navigator: &Navigator) -> String {
        let layout = self.engine.timeline(navigator);
        debug!("Drawing the timeline for {}", layout.title);
        draw_timeline(&layout)
    }
}

fn campus_text(campus: &[Campus]) -> String {
    campus
        .iter()
        .map(|campus| campus.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The agenda as text, one block per month
pub fn draw_agenda(groups: &[AgendaGroup]) -> String {
    if groups.is_empty() {
        return NO_EVENTS_TEXT.to_string();
    }

    let mut lines = Vec::new();
    for group in groups {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(group.label.to_uppercase());
        for entry in &group.entries {
            lines.push(format!(
                "  {:<34} {:<9} {} [{}] ({})",
                entry.dates,
                entry.event_type.label(),
                entry.title,
                entry.area,
                campus_text(&entry.campus)
            ));
            if !entry.description.is_empty() {
                lines.push(format!("  {:<34} {}", "", entry.description));
            }
        }
    }
    lines.join("\n")
}

/// The timeline as a grid of day columns, with one lane per area
pub fn draw_timeline(layout: &TimelineLayout) -> String {
    let mut lines = vec![layout.title.clone()];

    let mut header = String::new();
    let mut days = String::new();
    for day in &layout.days {
        let marker = if day.is_today { "*" } else { "" };
        header.push_str(&format!("{:<COLUMN_WIDTH$}", day.weekday));
        days.push_str(&format!("{:<COLUMN_WIDTH$}", format!("{}{marker}", day.day)));
    }
    lines.push(header.trim_end().to_string());
    lines.push(days.trim_end().to_string());

    if layout.is_empty() {
        lines.push(String::new());
        lines.push(NO_EVENTS_TEXT.to_string());
        return lines.join("\n");
    }

    for lane in &layout.lanes {
        lines.push(String::new());
        lines.push(lane.area.to_string());
        for item in &lane.items {
            let bar = if item.is_marker {
                "◆".to_string()
            } else {
                "═".repeat(item.column_span * COLUMN_WIDTH - 1)
            };
            lines.push(format!(
                "{}{bar} {}",
                " ".repeat(item.column_start * COLUMN_WIDTH),
                item.title
            ));
        }
    }
    lines.join("\n")
}
