// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{LineStyle, Point, colour::Colour};
use serde::Serialize;

/// Information needed to draw text (centred on the position)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
}

/// Information needed to draw a straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub style: LineStyle,
}

/// Information needed to draw a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dot {
    pub centre: Point,
    pub radius: f64,
    pub colour: Colour,
}
