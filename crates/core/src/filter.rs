// SPDX-License-Identifier: MIT

//!
//! Event filtering
//!
//! Every view shows the same filtered projection of the event collection.  An
//! event is shown when it passes every one of the filters, and an empty
//! filter lets everything through.
//!

use crate::{Area, CalendarEvent, Campus, Role};
use serde::{Deserialize, Serialize};

/// The current filter selections
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FilterState {
    pub roles: Vec<Role>,
    pub areas: Vec<Area>,
    pub campuses: Vec<Campus>,

    /// Faculty names
    pub faculties: Vec<String>,

    /// Institute names
    pub institutes: Vec<String>,

    /// Free text search (case-insensitive)
    pub search: String,
}

/// Add the item if it is missing, otherwise remove it
fn toggle<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if let Some(index) = list.iter().position(|existing| *existing == item) {
        list.remove(index);
    } else {
        list.push(item);
    }
}

impl FilterState {
    /// Whether the event passes every filter
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        self.matches_search(event)
            && self.matches_roles(event)
            && self.matches_area(event)
            && self.matches_campus(event)
            && self.matches_faculty(event)
            && self.matches_institute(event)
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn matches_search(&self, event: &CalendarEvent) -> bool {
        let term = self.search.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&term);
        contains(&event.title)
            || contains(&event.description)
            || event.faculty.as_deref().is_some_and(contains)
            || event.institute.as_deref().is_some_and(contains)
    }

    fn matches_roles(&self, event: &CalendarEvent) -> bool {
        self.roles.is_empty()
            || event.roles.is_empty()
            || self.roles.iter().any(|role| event.roles.contains(role))
    }

    fn matches_area(&self, event: &CalendarEvent) -> bool {
        self.areas.is_empty() || self.areas.contains(&event.area)
    }

    fn matches_campus(&self, event: &CalendarEvent) -> bool {
        self.campuses.is_empty()
            || event.is_university_wide()
            || self.campuses.iter().any(|campus| event.campus.contains(campus))
    }

    fn matches_faculty(&self, event: &CalendarEvent) -> bool {
        self.faculties.is_empty()
            || event
                .faculty
                .as_ref()
                .is_some_and(|faculty| self.faculties.contains(faculty))
    }

    fn matches_institute(&self, event: &CalendarEvent) -> bool {
        self.institutes.is_empty()
            || event
                .institute
                .as_ref()
                .is_some_and(|institute| self.institutes.contains(institute))
    }

    pub fn toggle_role(&mut self, role: Role) {
        toggle(&mut self.roles, role);
    }

    pub fn toggle_area(&mut self, area: Area) {
        toggle(&mut self.areas, area);
    }

    /// Toggle a campus.  The faculty and institute selections are cleared as
    /// they may no longer be available.
    pub fn toggle_campus(&mut self, campus: Campus) {
        toggle(&mut self.campuses, campus);
        self.faculties.clear();
        self.institutes.clear();
    }

    /// Toggle a faculty, clearing the institute selection
    pub fn toggle_faculty<S: ToString>(&mut self, faculty: S) {
        toggle(&mut self.faculties, faculty.to_string());
        self.institutes.clear();
    }

    pub fn toggle_institute<S: ToString>(&mut self, institute: S) {
        toggle(&mut self.institutes, institute.to_string());
    }

    /// Reset every filter
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{EventId, EventType};

    fn event(campus: Vec<Campus>, roles: Vec<Role>) -> CalendarEvent {
        let mut event = CalendarEvent::new(
            EventId::new(),
            "Søknadsfrist Samordna opptak",
            "2025-04-15",
            "2025-04-15",
            EventType::Deadline,
            Area::Opptak,
        );
        event.campus = campus;
        event.roles = roles;
        event.faculty = Some("Fakultet for økonomi".to_string());
        event
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filters = FilterState::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&event(vec![], vec![])));
        assert!(filters.matches(&event(vec![Campus::Gjovik], vec![Role::Student])));
    }

    #[test]
    fn search() {
        let mut filters = FilterState::default();
        filters.search = "SAMORDNA".to_string();
        assert!(filters.matches(&event(vec![], vec![])));

        // Matches the faculty too
        filters.search = "økonomi".to_string();
        assert!(filters.matches(&event(vec![], vec![])));

        filters.search = "eksamen".to_string();
        assert!(!filters.matches(&event(vec![], vec![])));
    }

    #[test]
    fn roles() {
        let mut filters = FilterState::default();
        filters.toggle_role(Role::Student);

        // Events for every role always match
        assert!(filters.matches(&event(vec![], vec![])));
        assert!(filters.matches(&event(vec![], vec![Role::Student, Role::Saksbehandler])));
        assert!(!filters.matches(&event(vec![], vec![Role::Saksbehandler])));
    }

    #[test]
    fn campuses() {
        let mut filters = FilterState::default();
        filters.toggle_campus(Campus::Gjovik);

        assert!(filters.matches(&event(vec![Campus::Gjovik], vec![])));
        assert!(filters.matches(&event(vec![Campus::HeleNtnu], vec![])));
        assert!(!filters.matches(&event(vec![Campus::Trondheim], vec![])));
    }

    #[test]
    fn areas_faculties_and_institutes() {
        let mut filters = FilterState::default();
        filters.toggle_area(Area::Eksamen);
        assert!(!filters.matches(&event(vec![], vec![])));
        filters.toggle_area(Area::Eksamen);
        assert!(filters.is_empty());

        filters.toggle_faculty("Fakultet for økonomi");
        assert!(filters.matches(&event(vec![], vec![])));

        // The event has no institute
        filters.toggle_institute("Institutt for industriell økonomi og teknologiledelse");
        assert!(!filters.matches(&event(vec![], vec![])));
    }

    #[test]
    fn toggles_clear_narrower_selections() {
        let mut filters = FilterState::default();
        filters.toggle_faculty("Fakultet for økonomi");
        filters.toggle_institute("Institutt for industriell økonomi og teknologiledelse");

        filters.toggle_faculty("Fakultet for naturvitenskap");
        assert_eq!(filters.faculties.len(), 2);
        assert!(filters.institutes.is_empty());

        filters.toggle_institute("Institutt for biologiske fag Ålesund");
        filters.toggle_campus(Campus::Alesund);
        assert!(filters.faculties.is_empty());
        assert!(filters.institutes.is_empty());
        assert_eq!(filters.campuses, vec![Campus::Alesund]);
    }
}
