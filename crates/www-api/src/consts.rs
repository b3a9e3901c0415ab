// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API consts
//!

/// The request header that must hold the shared editing password
pub const PASSWORD_HEADER: &str = "x-yearwheel-password";

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const ICS_FILE_NAME: &str = "arshjul.ics";
pub const JSON_FILE_NAME: &str = "arshjul.json";
