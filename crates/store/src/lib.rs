// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider year wheel project*
//!
//! This library crate is responsible for everything the year wheel keeps or
//! exchanges outside of memory.  It does the following:
//!
//! - Keeps the events and the user profile in a single local key-value store
//! (an SQLite database, or memory)
//! - Falls back to the built in events for the academic year until any
//! events have been saved
//! - Backs up & restores the events as JSON
//! - Exports the events as an ICS calendar
//! - Imports events from spreadsheets (CSV)
//! - Loads & saves the on-disk config
//!
//! This crate makes use of the `core` crate for the data model, and is itself
//! used by the `www-api` crate and the binaries.
//!

mod backup;
mod config;
mod db;
mod error;
mod ics;
mod kv;
mod repository;
mod spreadsheet;

pub use backup::*;
pub use config::*;
pub use db::*;
pub use error::*;
pub use ics::*;
pub use kv::*;
pub use repository::*;
pub use spreadsheet::*;
