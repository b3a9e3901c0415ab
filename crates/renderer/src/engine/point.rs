// SPDX-License-Identifier: MIT

//!
//! Points on the drawing (SVG coordinates, y grows downwards)
//!

use serde::Serialize;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The straight line distance between the points
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
