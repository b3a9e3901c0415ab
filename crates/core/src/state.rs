// SPDX-License-Identifier: MIT

//!
//! The application state: the event collection and the current filters
//!
//! Views only ever read (filtered) snapshots.  All changes to the collection
//! go through the save/delete/replace entry points here.
//!

use crate::{CalendarEvent, EventId, FilterState};
use log::debug;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    events: Vec<CalendarEvent>,
    filters: FilterState,
}

impl AppState {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            filters: FilterState::default(),
        }
    }

    /// Every event, in collection order
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// The event with the ID (if there is one)
    pub fn event(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == *id)
    }

    /// The events that pass the current filters
    pub fn filtered_events(&self) -> Vec<CalendarEvent> {
        self.events_matching(&self.filters)
    }

    /// The events that pass the given filters
    pub fn events_matching(&self, filters: &FilterState) -> Vec<CalendarEvent> {
        self.events
            .iter()
            .filter(|event| filters.matches(event))
            .cloned()
            .collect()
    }

    /// Insert the event, or replace the event with the same ID
    pub fn save_event(&mut self, event: CalendarEvent) {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => {
                debug!("Updating event {}", event.id);
                *existing = event;
            }
            None => {
                debug!("Adding event {}", event.id);
                self.events.push(event);
            }
        }
    }

    /// Delete the event with the ID, returning whether one was deleted
    pub fn delete_event(&mut self, id: &EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != *id);
        let deleted = self.events.len() != before;
        if deleted {
            debug!("Deleted event {id}");
        }
        deleted
    }

    /// Replace the whole collection
    pub fn replace_all(&mut self, events: Vec<CalendarEvent>) {
        debug!("Replacing all events ({} new)", events.len());
        self.events = events;
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Area, EventType};

    fn event(id: &str, area: Area) -> CalendarEvent {
        CalendarEvent::new(
            EventId::from(id).unwrap(),
            id,
            "2025-03-01",
            "2025-03-10",
            EventType::Period,
            area,
        )
    }

    #[test]
    fn save_inserts_then_replaces() {
        let mut state = AppState::default();
        state.save_event(event("a", Area::Opptak));
        state.save_event(event("b", Area::Eksamen));
        assert_eq!(state.events().len(), 2);

        let mut edited = event("a", Area::Annet);
        edited.title = "Edited".to_string();
        state.save_event(edited);

        assert_eq!(state.events().len(), 2);
        let a = state.event(&EventId::from("a").unwrap()).unwrap();
        assert_eq!(a.title, "Edited");

        // Order is preserved
        assert_eq!(state.events()[0].id.as_str(), "a");
    }

    #[test]
    fn delete_and_replace() {
        let mut state = AppState::new(vec![event("a", Area::Opptak), event("b", Area::Eksamen)]);
        assert!(state.delete_event(&EventId::from("a").unwrap()));
        assert!(!state.delete_event(&EventId::from("a").unwrap()));
        assert_eq!(state.events().len(), 1);

        state.replace_all(vec![]);
        assert!(state.events().is_empty());
    }

    #[test]
    fn filtered() {
        let mut state = AppState::new(vec![event("a", Area::Opptak), event("b", Area::Eksamen)]);
        assert_eq!(state.filtered_events().len(), 2);

        state.filters_mut().toggle_area(Area::Eksamen);
        let filtered = state.filtered_events();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "b");

        // The collection itself is untouched
        assert_eq!(state.events().len(), 2);
    }
}
