// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Backup & restore all events to & from JSON, and importing files
//!

use crate::{ImportError, import_csv};
use log::info;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use yearwheel_core::CalendarEvent;

/// The events as a pretty printed JSON array
pub fn events_to_json(events: &[CalendarEvent]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(events)
}

/// Parse a whole JSON document of events.  Nothing is returned unless every
/// record is valid.
pub fn events_from_json(json: &str) -> Result<Vec<CalendarEvent>, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// Backup the events to a JSON file
pub fn backup(events: &[CalendarEvent], path: &Path) -> Result<(), ImportError> {
    let json = events_to_json(events)?;
    create_and_write_to_file(path, &json)?;
    info!("Backed up {} events to {}", events.len(), path.display());
    Ok(())
}

/// Read the events from a JSON backup
pub fn restore(path: &Path) -> Result<Vec<CalendarEvent>, ImportError> {
    let reader = BufReader::new(File::open(path)?);
    let events: Vec<CalendarEvent> = serde_json::from_reader(reader)?;
    info!("Read {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Read the events from a JSON backup or a CSV spreadsheet (chosen by the
/// file extension)
pub fn import_file(path: &Path) -> Result<Vec<CalendarEvent>, ImportError> {
    let extension = path
        .extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "json" => restore(path),
        "csv" => import_csv(BufReader::new(File::open(path)?)),
        _ => Err(ImportError::UnsupportedFileType(extension)),
    }
}

/// Write a string to file at some path
fn create_and_write_to_file(path: &Path, content: &str) -> Result<(), ImportError> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
