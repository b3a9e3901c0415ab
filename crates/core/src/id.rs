// SPDX-License-Identifier: MIT

//!
//! Event IDs
//!
//! IDs are opaque strings.  Imported and seeded events keep whatever ID they
//! arrive with (e.g. `sp-etterarbeid`), new events get a UUIDv4.
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can arise in relation to an [`EventId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("ID cannot be empty")]
    Empty,
}

/// A unique, non-empty event identifier
#[rustfmt::skip]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create a new, globally unique, `EventId`
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an ID from a string if the string is not blank
    pub fn from<S: ToString>(string: S) -> Result<Self, IdError> {
        let string = string.to_string();
        if string.trim().is_empty() {
            Err(IdError::Empty)
        } else {
            Ok(Self(string.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        EventId::from(string).map_err(serde::de::Error::custom)
    }
}
