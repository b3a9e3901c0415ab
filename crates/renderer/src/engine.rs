// SPDX-License-Identifier: MIT

//!
//! The `yearwheel-renderer` engine
//!

mod agenda;
mod angle;
mod colours;
mod date_range;
mod heading;
mod helpers;
mod layout_params;
mod point;
mod polar;
mod primitives;
mod timeline;
mod wheel;

pub(crate) use helpers::*;

pub use agenda::*;
pub use angle::*;
pub use colours::*;
pub use date_range::*;
pub use heading::*;
pub use layout_params::*;
pub use point::*;
pub use polar::*;
pub use primitives::*;
pub use timeline::*;
pub use wheel::*;

use chrono::NaiveDate;
use log::debug;
use yearwheel_core::{CalendarEvent, EventId};

/// The core `yearwheel-renderer` engine.  This holds a snapshot of the
/// (already filtered) events along with the drawing settings, and produces
/// the layouts that every frontend draws from.
pub struct Engine {
    /// The events to draw
    events: Vec<CalendarEvent>,

    /// The year wheel's size and proportions (and the year shown)
    wheel_layout_params: WheelLayoutParams,

    /// The year wheel's colours
    colours: WheelColours,

    /// The date the "today" markers are drawn at
    today: NaiveDate,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new engine with no events, using today's date
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            wheel_layout_params: WheelLayoutParams::default(),
            colours: WheelColours::default(),
            today: yearwheel_core::today(),
        }
    }

    /// Get the year wheel layout parameters
    pub fn wheel_layout_params(&self) -> WheelLayoutParams {
        self.wheel_layout_params
    }

    pub fn set_wheel_layout_params(&mut self, params: WheelLayoutParams) {
        debug!("engine set wheel layout params");
        self.wheel_layout_params = params;
    }

    /// Set the year shown on the wheel
    pub fn set_year(&mut self, year: i32) {
        self.wheel_layout_params.year = year;
    }

    pub fn colours(&self) -> WheelColours {
        self.colours
    }

    pub fn set_colours(&mut self, colours: WheelColours) {
        debug!("engine set colours");
        self.colours = colours;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Use a fixed date for "today" (instead of the system date)
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Replace the events
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        debug!("engine set {} events", events.len());
        self.events = events;
    }

    pub fn add_events(&mut self, events: Vec<CalendarEvent>) {
        self.events.extend(events);
    }

    pub fn remove_events(&mut self, to_remove: &[EventId]) {
        self.events.retain(|event| !to_remove.contains(&event.id));
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Get all information needed to draw the year wheel
    pub fn wheel(&self) -> WheelLayout {
        layout_wheel(
            &self.events,
            &self.wheel_layout_params,
            &self.colours,
            self.today,
        )
    }

    /// Get all information needed to draw the timeline for the current
    /// navigation position
    pub fn timeline(&self, navigator: &Navigator) -> TimelineLayout {
        layout_timeline(&self.events, &navigator.with_today(self.today))
    }

    /// A navigator at the date, using the engine's "today"
    pub fn navigator(&self, date: NaiveDate, zoom: ZoomLevel) -> Navigator {
        Navigator::new(date, zoom).with_today(self.today)
    }

    /// Get the agenda (events grouped by month)
    pub fn agenda(&self) -> Vec<AgendaGroup> {
        layout_agenda(&self.events)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use yearwheel_core::{Area, EventType};
    use yearwheel_macros::ymd;

    fn event(id: &str, area: Area) -> CalendarEvent {
        CalendarEvent::new(
            EventId::from(id).unwrap(),
            id,
            "2025-03-03",
            "2025-03-07",
            EventType::Period,
            area,
        )
    }

    #[test]
    fn engine() {
        let mut engine = Engine::new();
        engine.set_today(ymd!(2025, 3, 4));
        engine.set_events(vec![event("a", Area::Opptak), event("b", Area::Eksamen)]);
        engine.add_events(vec![event("c", Area::Annet)]);
        assert_eq!(engine.event_count(), 3);

        engine.remove_events(&[EventId::from("b").unwrap()]);
        assert_eq!(engine.event_count(), 2);

        let wheel = engine.wheel();
        assert_eq!(wheel.rings.len(), 2);
        assert_eq!(wheel.today.map(|today| today.date), Some(ymd!(2025, 3, 4)));

        engine.set_year(2024);
        let wheel = engine.wheel();
        assert_eq!(wheel.year, 2024);
        assert!(wheel.items().next().is_none());
        assert!(wheel.today.is_none());

        let navigator = engine.navigator(ymd!(2025, 3, 5), ZoomLevel::Week);
        let timeline = engine.timeline(&navigator);
        assert_eq!(timeline.lanes.len(), 2);
        assert!(timeline.days.iter().any(|day| day.is_today));

        assert_eq!(engine.agenda().len(), 1);

        engine.clear_events();
        assert_eq!(engine.event_count(), 0);
    }
}
