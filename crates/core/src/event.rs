// SPDX-License-Identifier: MIT

//!
//! The calendar event type and its tags
//!
//! The serialised form of a [`CalendarEvent`] is the record shape shared by
//! the local store, JSON backups, and the web API, so it must round-trip
//! exactly.  Dates are therefore kept as the `YYYY-MM-DD` strings they arrive
//! as, and are parsed on use.
//!

use crate::{DateError, EventId, Icon, Interval, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The academic area (category) of an event.  The declaration order is the
/// fixed display order (e.g. ring order in the year wheel).
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
pub enum Area {
    Opptak,
    Semesterstart,
    Eksamen,
    #[display("Emne- og porteføljearbeid")]
    #[serde(rename = "Emne- og porteføljearbeid")]
    EmneOgPortefoljearbeid,
    Internasjonalisering,
    Studieplanprosessen,
    Annet,
}

impl Area {
    /// Every area, in display order
    pub const ALL: [Area; 7] = [
        Area::Opptak,
        Area::Semesterstart,
        Area::Eksamen,
        Area::EmneOgPortefoljearbeid,
        Area::Internasjonalisering,
        Area::Studieplanprosessen,
        Area::Annet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Opptak => "Opptak",
            Area::Semesterstart => "Semesterstart",
            Area::Eksamen => "Eksamen",
            Area::EmneOgPortefoljearbeid => "Emne- og porteføljearbeid",
            Area::Internasjonalisering => "Internasjonalisering",
            Area::Studieplanprosessen => "Studieplanprosessen",
            Area::Annet => "Annet",
        }
    }

    /// Look up an area by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.as_str() == name.trim())
    }
}

/// How an event is shown: deadlines are points in time, periods and events
/// are spans
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
pub enum EventType {
    Deadline,
    Period,
    Event,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Deadline, EventType::Period, EventType::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Deadline => "Deadline",
            EventType::Period => "Period",
            EventType::Event => "Event",
        }
    }

    /// The Norwegian label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Deadline => "Frist",
            EventType::Period => "Periode",
            EventType::Event => "Hendelse",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name.trim())
    }
}

/// A university campus
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
pub enum Campus {
    Trondheim,
    #[display("Gjøvik")]
    #[serde(rename = "Gjøvik")]
    Gjovik,
    #[display("Ålesund")]
    #[serde(rename = "Ålesund")]
    Alesund,
    /// The whole university (matches every campus)
    #[display("Hele NTNU")]
    #[serde(rename = "Hele NTNU")]
    HeleNtnu,
}

impl Campus {
    pub const ALL: [Campus; 4] = [
        Campus::Trondheim,
        Campus::Gjovik,
        Campus::Alesund,
        Campus::HeleNtnu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Campus::Trondheim => "Trondheim",
            Campus::Gjovik => "Gjøvik",
            Campus::Alesund => "Ålesund",
            Campus::HeleNtnu => "Hele NTNU",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|campus| campus.as_str() == name.trim())
    }
}

/// The roles an event is relevant to
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
pub enum Role {
    Saksbehandler,
    Studieveileder,
    Emneansvarlig,
    Fellesadministrasjon,
    Student,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Saksbehandler,
        Role::Studieveileder,
        Role::Emneansvarlig,
        Role::Fellesadministrasjon,
        Role::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Saksbehandler => "Saksbehandler",
            Role::Studieveileder => "Studieveileder",
            Role::Emneansvarlig => "Emneansvarlig",
            Role::Fellesadministrasjon => "Fellesadministrasjon",
            Role::Student => "Student",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name.trim())
    }
}

/// A titled link to a related resource
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub title: String,
    pub url: String,
}

impl Link {
    /// Create a link, prefixing `https://` to URLs that have no scheme
    pub fn new<T: ToString, U: AsRef<str>>(title: T, url: U) -> Self {
        let url = url.as_ref().trim();
        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{url}")
        };
        Self {
            title: title.to_string(),
            url,
        }
    }
}

/// An academic calendar event
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// `YYYY-MM-DD`, inclusive
    pub start_date: String,

    /// `YYYY-MM-DD`, inclusive
    pub end_date: String,

    #[serde(rename = "type")]
    pub event_type: EventType,
    pub area: Area,
    #[serde(default)]
    pub campus: Vec<Campus>,

    /// Empty means every role
    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,

    /// Informational only (recurring events are not expanded)
    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl CalendarEvent {
    /// Create an event for the whole university, relevant to every role
    pub fn new<T: ToString>(
        id: EventId,
        title: T,
        start_date: &str,
        end_date: &str,
        event_type: EventType,
        area: Area,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            event_type,
            area,
            campus: vec![Campus::HeleNtnu],
            roles: Vec::new(),
            faculty: None,
            institute: None,
            links: None,
            is_recurring: false,
            updated_by: None,
            icon: None,
        }
    }

    pub fn start(&self) -> Result<NaiveDate, DateError> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Result<NaiveDate, DateError> {
        parse_date(&self.end_date)
    }

    /// Both dates, if both parse
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), DateError> {
        Ok((self.start()?, self.end()?))
    }

    /// Whether the event is drawn as a single point in time (a deadline, or
    /// an event that starts and ends on the same day)
    pub fn is_point(&self) -> bool {
        self.event_type == EventType::Deadline || self.start_date == self.end_date
    }

    /// Whether the event overlaps the interval (false if a date is invalid)
    pub fn overlaps(&self, interval: &Interval) -> bool {
        match self.dates() {
            Ok((start, end)) => interval.overlaps(start, end),
            Err(_) => false,
        }
    }

    /// Whether the event applies to the whole university
    pub fn is_university_wide(&self) -> bool {
        self.campus.contains(&Campus::HeleNtnu)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use yearwheel_macros::ymd;

    const RECORD: &str = r#"{
        "id": "sp-fakultetsfrist",
        "title": "Fakultetsfrist EpN",
        "description": "Frist for fakultetene til å ferdigstille emner i EpN.",
        "startDate": "2025-01-15",
        "endDate": "2025-01-15",
        "type": "Deadline",
        "area": "Emne- og porteføljearbeid",
        "campus": ["Hele NTNU", "Gjøvik"],
        "roles": ["Saksbehandler"],
        "faculty": "Enhet for FS og eksamen",
        "links": [{"title": "EpN", "url": "https://epn.ntnu.no"}],
        "isRecurring": true,
        "icon": "Clock"
    }"#;

    #[test]
    fn deserialize_record() {
        let event: CalendarEvent = serde_json::from_str(RECORD).unwrap();
        assert_eq!(event.id.as_str(), "sp-fakultetsfrist");
        assert_eq!(event.event_type, EventType::Deadline);
        assert_eq!(event.area, Area::EmneOgPortefoljearbeid);
        assert_eq!(event.campus, vec![Campus::HeleNtnu, Campus::Gjovik]);
        assert_eq!(event.roles, vec![Role::Saksbehandler]);
        assert_eq!(event.institute, None);
        assert_eq!(event.icon, Some(Icon::Clock));
        assert!(event.is_recurring);
        assert!(event.is_point());
        assert_eq!(event.start(), Ok(ymd!(2025, 1, 15)));
    }

    #[test]
    fn record_round_trips() {
        let event: CalendarEvent = serde_json::from_str(RECORD).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        let original: serde_json::Value = serde_json::from_str(RECORD).unwrap();
        assert_eq!(json, original);
    }

    #[test]
    fn invalid_records() {
        // Unknown area
        let json = RECORD.replace("Emne- og porteføljearbeid", "Mat");
        assert!(serde_json::from_str::<CalendarEvent>(&json).is_err());

        // Unknown campus
        let json = RECORD.replace("Gjøvik", "Oslo");
        assert!(serde_json::from_str::<CalendarEvent>(&json).is_err());
    }

    #[test]
    fn area_names() {
        for area in Area::ALL {
            assert_eq!(Area::from_name(area.as_str()), Some(area));
            assert_eq!(area.to_string(), area.as_str());
        }
        assert_eq!(Area::from_name("Emne- og porteføljearbeid"), Some(Area::EmneOgPortefoljearbeid));
        assert_eq!(Area::from_name("Mat"), None);
        assert_eq!(Campus::HeleNtnu.to_string(), "Hele NTNU");
    }

    #[test]
    fn links_get_a_scheme() {
        assert_eq!(Link::new("a", "ntnu.no").url, "https://ntnu.no");
        assert_eq!(Link::new("a", " http://ntnu.no ").url, "http://ntnu.no");
        assert_eq!(Link::new("a", "https://ntnu.no").url, "https://ntnu.no");
    }

    #[test]
    fn point_and_overlap() {
        let mut event = CalendarEvent::new(
            EventId::new(),
            "Eksamen",
            "2025-05-05",
            "2025-06-06",
            EventType::Period,
            Area::Eksamen,
        );
        assert!(!event.is_point());
        let may = Interval::month_containing(ymd!(2025, 5, 1)).unwrap();
        let july = Interval::month_containing(ymd!(2025, 7, 1)).unwrap();
        assert!(event.overlaps(&may));
        assert!(!event.overlaps(&july));

        event.end_date = "2025-13-40".to_string();
        assert!(!event.overlaps(&may));
    }
}
