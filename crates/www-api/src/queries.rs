// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All query parameter structs
//!

use serde::Deserialize;
use thiserror::Error;
use yearwheel_core::{Area, Campus, DateError, FilterState, Role, parse_date, today};
use yearwheel_renderer::{Navigator, ZoomLevel};

/// Invalid query parameters
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Unknown area '{0}'")]
    UnknownArea(String),

    #[error("Unknown campus '{0}'")]
    UnknownCampus(String),

    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    #[error("Unknown zoom '{0}' (expected month or week)")]
    UnknownZoom(String),
}

/// The filters (lists are comma separated)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterQueryParams {
    pub search: Option<String>,
    pub areas: Option<String>,
    pub campuses: Option<String>,
    pub roles: Option<String>,
    pub faculties: Option<String>,
    pub institutes: Option<String>,
}

/// The non-empty items of a comma separated list
fn split_list(list: &Option<String>) -> impl Iterator<Item = &str> {
    list.iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Parse every item in the list, failing on the first unknown one
fn parse_list<T>(
    list: &Option<String>,
    parse: fn(&str) -> Option<T>,
    error: fn(String) -> QueryError,
) -> Result<Vec<T>, QueryError> {
    split_list(list)
        .map(|item| parse(item).ok_or_else(|| error(item.to_string())))
        .collect()
}

impl FilterQueryParams {
    pub fn filter_state(&self) -> Result<FilterState, QueryError> {
        Ok(FilterState {
            roles: parse_list(&self.roles, Role::from_name, QueryError::UnknownRole)?,
            areas: parse_list(&self.areas, Area::from_name, QueryError::UnknownArea)?,
            campuses: parse_list(&self.campuses, Campus::from_name, QueryError::UnknownCampus)?,
            faculties: split_list(&self.faculties).map(str::to_string).collect(),
            institutes: split_list(&self.institutes).map(str::to_string).collect(),
            search: self.search.clone().unwrap_or_default(),
        })
    }
}

/// Where the timeline is (defaults to this month)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TimelineQueryParams {
    /// `YYYY-MM-DD`
    pub date: Option<String>,

    /// `month` or `week`
    pub zoom: Option<String>,
}

impl TimelineQueryParams {
    pub fn navigator(&self) -> Result<Navigator, QueryError> {
        let date = match &self.date {
            Some(date) => parse_date(date)?,
            None => today(),
        };
        let zoom = match &self.zoom {
            Some(zoom) => {
                ZoomLevel::from_name(zoom).ok_or_else(|| QueryError::UnknownZoom(zoom.clone()))?
            }
            None => ZoomLevel::default(),
        };
        Ok(Navigator::new(date, zoom))
    }
}
