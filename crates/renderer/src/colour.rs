// SPDX-License-Identifier: MIT

//!
//! Colours used when drawing
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (expected e.g. `#ab66ef`)")]
    InvalidHex(String),
}

/// An RGB colour.  Serialised as a CSS hex string (e.g. `#3b82f6`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_hex()
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(value)
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let invalid = || ColourError::InvalidHex(original.clone());

        let hex = original.strip_prefix('#').unwrap_or(&original);
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let hex = match hex.len() {
            6 => hex,
            8 => &hex[..6],
            _ => return Err(invalid()),
        };

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Colour::from_rgb(component(0..2)?, component(2..4)?, component(4..6)?))
    }

    /// The colour as a lowercase CSS hex string (e.g. `#0affc3`)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
