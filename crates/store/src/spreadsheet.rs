// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Importing events from a spreadsheet (saved as CSV)
//!
//! Columns are found by keywords in their headers (Norwegian or English), so
//! the column order doesn't matter and unknown columns are ignored.  Rows
//! that can't be turned into an event are skipped and logged, but a file that
//! can't be read at all is an error.
//!

use crate::ImportError;
use chrono::{Days, NaiveDate};
use log::{info, warn};
use std::collections::HashMap;
use std::io::Read;
use thiserror::Error;
use yearwheel_core::{
    Area, CalendarEvent, Campus, EventId, EventType, Role, format_iso_date, parse_date,
};

/// The columns that are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    Title,
    Description,
    Start,
    End,
    Area,
    Type,
    Campus,
    Role,
}

impl Column {
    /// In the order headers are checked
    const ALL: [Column; 8] = [
        Column::Title,
        Column::Description,
        Column::Start,
        Column::End,
        Column::Area,
        Column::Type,
        Column::Campus,
        Column::Role,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Column::Title => &["title", "tittel", "aktivitet"],
            Column::Description => &["description", "beskrivelse"],
            Column::Start => &["start", "fra"],
            Column::End => &["end", "slutt", "til"],
            Column::Area => &["ring", "område", "area", "kategori"],
            Column::Type => &["type"],
            Column::Campus => &["campus"],
            Column::Role => &["rolle", "role"],
        }
    }
}

/// Why a row was skipped
#[derive(Debug, Error, PartialEq)]
enum SkippedRow {
    #[error("no title")]
    MissingTitle,

    #[error("no start date")]
    MissingStartDate,

    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

/// Match each header to a column by the words in it.  Headers that are a
/// keyword word for word are matched first, then headers with a word that
/// starts with a keyword ("Sluttdato" is an end, "Kalender" isn't).
fn map_headers(headers: &csv::StringRecord) -> HashMap<Column, usize> {
    let words: Vec<Vec<String>> = headers.iter().map(header_words).collect();
    let mut columns = HashMap::new();
    let mut assigned = vec![false; words.len()];

    for exact in [true, false] {
        let matches = |word: &str, keyword: &str| {
            if exact {
                word == keyword
            } else {
                word.starts_with(keyword)
            }
        };
        for (index, header_words) in words.iter().enumerate() {
            if assigned[index] {
                continue;
            }
            let column = Column::ALL.into_iter().find(|column| {
                !columns.contains_key(column)
                    && column.keywords().iter().any(|keyword| {
                        header_words.iter().any(|word| matches(word, keyword))
                    })
            });
            if let Some(column) = column {
                columns.insert(column, index);
                assigned[index] = true;
            }
        }
    }
    columns
}

/// The lowercase words of a header
fn header_words(header: &str) -> Vec<String> {
    header
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// The first day of the 1900 date system (serial 25569 is 1970-01-01)
fn spreadsheet_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Parse a spreadsheet date: `YYYY-MM-DD`, `DD.MM.YYYY` (or `D.M.YYYY`), or a
/// serial day number
pub fn parse_spreadsheet_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.contains('-') {
        return parse_date(cell).ok();
    }

    let parts: Vec<&str> = cell.split('.').collect();
    if parts.len() == 3 {
        let day = parts[0].trim().parse().ok()?;
        let month = parts[1].trim().parse().ok()?;
        let year = parts[2].trim().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let serial: f64 = cell.parse().ok()?;
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    spreadsheet_epoch()?.checked_add_days(Days::new(serial.floor() as u64))
}

/// The first area whose name contains the text (or is contained by it),
/// else [`Area::Annet`]
pub fn area_from_text(text: &str) -> Area {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return Area::Annet;
    }
    Area::ALL
        .into_iter()
        .find(|area| {
            let name = area.as_str().to_lowercase();
            name.contains(&text) || text.contains(&name)
        })
        .unwrap_or(Area::Annet)
}

pub fn event_type_from_text(text: &str) -> EventType {
    let text = text.to_lowercase();
    if text.contains("frist") || text.contains("deadline") {
        EventType::Deadline
    } else if text.contains("period") {
        EventType::Period
    } else {
        EventType::Event
    }
}

/// The known names in a comma (or semicolon) separated list
fn names_from_text<T: Copy>(text: &str, all: &[T], name: fn(&T) -> &'static str) -> Vec<T> {
    text.split([',', ';'])
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            all.iter()
                .find(|item| name(item).to_lowercase() == part)
                .copied()
        })
        .collect()
}

fn row_to_event(
    columns: &HashMap<Column, usize>,
    record: &csv::StringRecord,
) -> Result<CalendarEvent, SkippedRow> {
    let cell = |column: Column| {
        columns
            .get(&column)
            .and_then(|&index| record.get(index))
            .map(str::trim)
            .unwrap_or("")
    };
    let date = |text: &str| {
        parse_spreadsheet_date(text).ok_or_else(|| SkippedRow::InvalidDate(text.to_string()))
    };

    let title = cell(Column::Title);
    if title.is_empty() {
        return Err(SkippedRow::MissingTitle);
    }
    let start = match cell(Column::Start) {
        "" => return Err(SkippedRow::MissingStartDate),
        text => date(text)?,
    };
    let end = match cell(Column::End) {
        "" => start,
        text => date(text)?,
    };

    let mut event = CalendarEvent::new(
        EventId::new(),
        title,
        &format_iso_date(start),
        &format_iso_date(end),
        event_type_from_text(cell(Column::Type)),
        area_from_text(cell(Column::Area)),
    );
    event.description = cell(Column::Description).to_string();
    let campus = names_from_text(cell(Column::Campus), &Campus::ALL, Campus::as_str);
    if !campus.is_empty() {
        event.campus = campus;
    }
    event.roles = names_from_text(cell(Column::Role), &Role::ALL, Role::as_str);
    Ok(event)
}

/// Read events from CSV with a header row
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<CalendarEvent>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = map_headers(reader.headers()?);
    if !columns.contains_key(&Column::Title) {
        return Err(ImportError::NoTitleColumn(Column::Title.keywords().join(", ")));
    }
    if !columns.contains_key(&Column::Start) {
        return Err(ImportError::NoStartColumn(Column::Start.keywords().join(", ")));
    }

    let mut events = Vec::new();
    let mut skipped = 0;
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        match row_to_event(&columns, &record) {
            Ok(event) => events.push(event),
            Err(reason) => {
                // Line numbers count the header
                warn!("Skipping spreadsheet row {}: {reason}", index + 2);
                skipped += 1;
            }
        }
    }
    info!("Imported {} events ({skipped} rows skipped)", events.len());
    Ok(events)
}
