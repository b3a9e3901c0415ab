// SPDX-License-Identifier: MIT

//!
//! *Part of the wider year wheel project*
//!
//! This crate defines the basic datatypes used across the year wheel project
//! (web API, CLI, renderer, store): calendar events and their tags, dates and
//! date intervals, filtering, event drafts, and the application state.
//!
//! Date handling here never panics.  Functions that can be given malformed
//! dates return a `Result` (or a fallback label for display), so that one bad
//! record can only ever affect itself.
//!

mod branching;
mod date;
mod draft;
mod event;
mod filter;
mod icon;
mod id;
mod profile;
mod state;

pub use branching::*;
pub use date::*;
pub use draft::*;
pub use event::*;
pub use filter::*;
pub use icon::*;
pub use id::*;
pub use profile::*;
pub use state::*;
