// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The year wheel's size and proportions (in SVG user units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelLayoutParams {
    /// The year shown on the wheel
    pub year: i32,

    /// The width and height of the (square) drawing
    pub size: f64,

    /// The radius of the outermost ring's outer edge
    pub outer_radius: f64,

    /// The radius of the innermost ring's inner edge
    pub inner_radius: f64,

    /// The gap between rings
    pub ring_gap: f64,

    /// Sectors are never drawn narrower than this (degrees)
    pub min_sector_width: f64,

    /// How far outside the outer radius the month labels sit
    pub label_offset: f64,

    /// The radius of the dot drawn for point in time events
    pub marker_radius: f64,
}

impl Default for WheelLayoutParams {
    fn default() -> Self {
        WheelLayoutParams {
            year: 2025,
            size: 800.0,
            outer_radius: 380.0,
            inner_radius: 120.0,
            ring_gap: 5.0,
            min_sector_width: 0.5,
            label_offset: 20.0,
            marker_radius: 4.0,
        }
    }
}

impl WheelLayoutParams {
    pub fn centre(&self) -> Point {
        Point {
            x: self.size / 2.0,
            y: self.size / 2.0,
        }
    }

    /// The thickness of each ring when there are `ring_count` rings
    pub fn ring_thickness(&self, ring_count: usize) -> f64 {
        let ring_count = ring_count.max(1) as f64;
        (self.outer_radius - self.inner_radius) / ring_count - self.ring_gap
    }

    /// The inner and outer radius of ring `index` (0 is the innermost)
    pub fn ring_radii(&self, index: usize, ring_count: usize) -> (f64, f64) {
        let thickness = self.ring_thickness(ring_count);
        let inner = self.inner_radius + index as f64 * (thickness + self.ring_gap);
        (inner, inner + thickness)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rings_do_not_overlap() {
        let params = WheelLayoutParams::default();
        for count in 1..=7 {
            let mut previous_outer = params.inner_radius - params.ring_gap;
            for index in 0..count {
                let (inner, outer) = params.ring_radii(index, count);
                assert!(inner > previous_outer - 1e-9);
                assert!((inner - previous_outer - params.ring_gap).abs() < 1e-9);
                assert!(outer > inner);
                assert!(outer <= params.outer_radius);
                previous_outer = outer;
            }
        }
    }

    #[test]
    fn two_rings() {
        let params = WheelLayoutParams::default();
        assert_eq!(params.ring_thickness(2), 125.0);
        assert_eq!(params.ring_radii(0, 2), (120.0, 245.0));
        assert_eq!(params.ring_radii(1, 2), (250.0, 375.0));
    }

    #[test]
    fn partial_json() {
        let params: WheelLayoutParams = serde_json::from_str(r#"{"year": 2026}"#).unwrap();
        assert_eq!(params.year, 2026);
        assert_eq!(params.size, 800.0);
    }
}
