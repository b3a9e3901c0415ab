// SPDX-License-Identifier: MIT

//!
//! Polar geometry
//!
//! Angles are in degrees, measured clockwise from 12 o'clock (so 0° is at the
//! top of the wheel and 90° is at 3 o'clock).  Paths are built as a list of
//! commands and written out as SVG path data.
//!

use super::round_f64_to_nearest_0_01;
use crate::Point;
use serde::Serialize;
use std::fmt::{self, Display};

/// Sectors spanning at least this many degrees are drawn as a full annulus
pub const FULL_CIRCLE_THRESHOLD_DEGREES: f64 = 359.9;

/// Convert a polar coordinate (about the centre) to a cartesian one
pub fn polar_to_cartesian(centre: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: centre.x + radius * radians.cos(),
        y: centre.y + radius * radians.sin(),
    }
}

/// A single path drawing command
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),

    /// A circular arc from the current point to `to`
    Arc {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        to: Point,
    },

    Close,
}

impl Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = round_f64_to_nearest_0_01;
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", r(p.x), r(p.y)),
            PathCommand::LineTo(p) => write!(f, "L {} {}", r(p.x), r(p.y)),
            PathCommand::Arc {
                radius,
                large_arc,
                clockwise,
                to,
            } => write!(
                f,
                "A {radius} {radius} 0 {} {} {} {}",
                u8::from(*large_arc),
                u8::from(*clockwise),
                r(to.x),
                r(to.y),
                radius = r(*radius),
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// A drawable outline.  Displays as SVG path data (e.g. `M 0 0 L 10 0 Z`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Path(Vec<PathCommand>);

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    fn push(&mut self, command: PathCommand) {
        self.0.push(command);
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

/// A circular arc at a fixed radius, drawn clockwise from the start angle to
/// the end angle
pub fn arc_path(centre: Point, radius: f64, start_angle: f64, end_angle: f64) -> Path {
    let mut path = Path::default();
    path.push(PathCommand::MoveTo(polar_to_cartesian(centre, radius, start_angle)));
    path.push(PathCommand::Arc {
        radius,
        large_arc: end_angle - start_angle > 180.0,
        clockwise: true,
        to: polar_to_cartesian(centre, radius, end_angle),
    });
    path
}

/// The region between two concentric arcs (a "donut sector").  The angles may
/// be given in either order.  A span of [`FULL_CIRCLE_THRESHOLD_DEGREES`] or
/// more gives a full annulus, as an arc can't start and end at the same point.
pub fn donut_sector_path(
    centre: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Path {
    let (start_angle, end_angle) = if start_angle <= end_angle {
        (start_angle, end_angle)
    } else {
        (end_angle, start_angle)
    };

    if end_angle - start_angle >= FULL_CIRCLE_THRESHOLD_DEGREES {
        return annulus_path(centre, inner_radius, outer_radius);
    }

    let large_arc = end_angle - start_angle > 180.0;
    let mut path = Path::default();
    path.push(PathCommand::MoveTo(polar_to_cartesian(
        centre,
        outer_radius,
        start_angle,
    )));
    path.push(PathCommand::Arc {
        radius: outer_radius,
        large_arc,
        clockwise: true,
        to: polar_to_cartesian(centre, outer_radius, end_angle),
    });
    path.push(PathCommand::LineTo(polar_to_cartesian(
        centre,
        inner_radius,
        end_angle,
    )));
    path.push(PathCommand::Arc {
        radius: inner_radius,
        large_arc,
        clockwise: false,
        to: polar_to_cartesian(centre, inner_radius, start_angle),
    });
    path.push(PathCommand::Close);
    path
}

/// A full ring: the outer circle clockwise and the inner circle anticlockwise
/// (two half arcs each), so the inner circle is a hole
fn annulus_path(centre: Point, inner_radius: f64, outer_radius: f64) -> Path {
    let mut path = Path::default();
    for (radius, clockwise) in [(outer_radius, true), (inner_radius, false)] {
        let top = polar_to_cartesian(centre, radius, 0.0);
        let bottom = polar_to_cartesian(centre, radius, 180.0);
        path.push(PathCommand::MoveTo(top));
        for to in [bottom, top] {
            path.push(PathCommand::Arc {
                radius,
                large_arc: true,
                clockwise,
                to,
            });
        }
        path.push(PathCommand::Close);
    }
    path
}
