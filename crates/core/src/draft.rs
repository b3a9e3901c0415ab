// SPDX-License-Identifier: MIT

//!
//! Event drafts (the contents of the event form before it is validated)
//!

use crate::{
    Area, CalendarEvent, Campus, DateError, EventId, EventType, Icon, Link, Role, parse_date,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that stop a draft becoming an event
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("A title is required")]
    MissingTitle,

    #[error("A start date is required")]
    MissingStartDate,

    #[error("An end date is required")]
    MissingEndDate,

    #[error("Invalid {field}: {source}")]
    InvalidDate {
        field: &'static str,
        source: DateError,
    },
}

/// An event being created or edited.  Every field is optional until the
/// draft is validated by [`EventDraft::into_event`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub id: Option<EventId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub area: Option<Area>,
    pub campus: Option<Vec<Campus>>,
    pub roles: Option<Vec<Role>>,
    pub faculty: Option<String>,
    pub institute: Option<String>,
    pub links: Option<Vec<Link>>,
    pub is_recurring: Option<bool>,
    pub updated_by: Option<String>,
    pub icon: Option<Icon>,
}

/// `None` for missing or blank text
fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

impl From<&CalendarEvent> for EventDraft {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            id: Some(event.id.clone()),
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            start_date: Some(event.start_date.clone()),
            end_date: Some(event.end_date.clone()),
            event_type: Some(event.event_type),
            area: Some(event.area),
            campus: Some(event.campus.clone()),
            roles: Some(event.roles.clone()),
            faculty: event.faculty.clone(),
            institute: event.institute.clone(),
            links: event.links.clone(),
            is_recurring: Some(event.is_recurring),
            updated_by: event.updated_by.clone(),
            icon: event.icon,
        }
    }
}

impl EventDraft {
    /// Add a link (URLs without a scheme get `https://`)
    pub fn add_link<T: ToString, U: AsRef<str>>(&mut self, title: T, url: U) {
        self.links
            .get_or_insert_with(Vec::new)
            .push(Link::new(title, url));
    }

    /// Remove the link at the index (if there is one)
    pub fn remove_link(&mut self, index: usize) {
        if let Some(links) = self.links.as_mut()
            && index < links.len()
        {
            links.remove(index);
        }
    }

    /// Fill every field missing from this draft with the event's value, so
    /// that a partial edit can be applied to an existing event
    pub fn merged_over(self, event: &CalendarEvent) -> Self {
        let base = EventDraft::from(event);
        Self {
            id: self.id.or(base.id),
            title: self.title.or(base.title),
            description: self.description.or(base.description),
            start_date: self.start_date.or(base.start_date),
            end_date: self.end_date.or(base.end_date),
            event_type: self.event_type.or(base.event_type),
            area: self.area.or(base.area),
            campus: self.campus.or(base.campus),
            roles: self.roles.or(base.roles),
            faculty: self.faculty.or(base.faculty),
            institute: self.institute.or(base.institute),
            links: self.links.or(base.links),
            is_recurring: self.is_recurring.or(base.is_recurring),
            updated_by: self.updated_by.or(base.updated_by),
            icon: self.icon.or(base.icon),
        }
    }

    /// Validate the draft.  The title and both dates are required, and the
    /// dates must be valid `YYYY-MM-DD` dates.  A missing campus list means
    /// the whole university and a missing ID is generated.
    pub fn into_event(self) -> Result<CalendarEvent, DraftError> {
        let title = non_blank(self.title).ok_or(DraftError::MissingTitle)?;
        let start_date = non_blank(self.start_date).ok_or(DraftError::MissingStartDate)?;
        let end_date = non_blank(self.end_date).ok_or(DraftError::MissingEndDate)?;

        parse_date(&start_date).map_err(|source| DraftError::InvalidDate {
            field: "start date",
            source,
        })?;
        parse_date(&end_date).map_err(|source| DraftError::InvalidDate {
            field: "end date",
            source,
        })?;

        let campus = match self.campus {
            Some(campus) if !campus.is_empty() => campus,
            _ => vec![Campus::HeleNtnu],
        };

        Ok(CalendarEvent {
            id: self.id.unwrap_or_default(),
            title: title.trim().to_string(),
            description: self.description.unwrap_or_default(),
            start_date,
            end_date,
            event_type: self.event_type.unwrap_or(EventType::Deadline),
            area: self.area.unwrap_or(Area::Annet),
            campus,
            roles: self.roles.unwrap_or_default(),
            faculty: non_blank(self.faculty),
            institute: non_blank(self.institute),
            links: Some(self.links.unwrap_or_default()),
            is_recurring: self.is_recurring.unwrap_or(false),
            updated_by: self.updated_by,
            icon: self.icon,
        })
    }
}
