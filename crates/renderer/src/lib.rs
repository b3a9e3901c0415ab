// SPDX-License-Identifier: MIT

//!
//! *Part of the wider year wheel project*
//!
//! This crate lays out the academic year for drawing.  The core of the crate
//! is a platform independent engine responsible for:
//!
//! - Converting dates to angles around the wheel
//! - Placing events in area rings as sectors or markers
//! - Laying out the month/week timeline and the agenda
//! - Providing a simple API for frontends
//!
//! The rest of the crate holds code for the frontends.  The 2 currently
//! offered frontends are:
//!
//! - SVG (a standalone document of the year wheel)
//! - Plain text (the agenda and timeline, for terminals)
//!
//! ## Usage
//!
//! ```
//! use yearwheel_renderer::YearWheelRendererSvg;
//!
//! let mut renderer = YearWheelRendererSvg::new();
//! renderer.set_year(2025);
//! let svg = renderer.draw();
//! assert!(svg.starts_with("<svg"));
//! ```
//!

pub mod colour;
pub mod colours;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use colours::*;
pub use engine::*;
pub use frontends::svg::{YearWheelRendererSvg, draw_wheel};
pub use frontends::text::{NO_EVENTS_TEXT, YearWheelRendererText, draw_agenda, draw_timeline};
