// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use crate::colour::Colour;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,

    /// Dash and gap lengths (solid if `None`)
    pub dash: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelColours {
    pub background: Colour,
    pub boundary_circle: LineStyle,
    pub month_separator: LineStyle,
    pub month_label: Colour,
    pub ring_outline: LineStyle,
    pub today: LineStyle,
    pub centre_title: Colour,
    pub centre_subtitle: Colour,

    /// The opacity of sectors (markers are opaque)
    pub sector_opacity: f64,
}

impl Default for WheelColours {
    fn default() -> Self {
        let gray_100 = Colour::from_rgb(0xf3, 0xf4, 0xf6);
        let gray_200 = Colour::from_rgb(0xe5, 0xe7, 0xeb);
        let gray_500 = Colour::from_rgb(0x6b, 0x72, 0x80);
        let red_500 = Colour::from_rgb(0xef, 0x44, 0x44);
        Self {
            background: Colour::from_rgb(0xff, 0xff, 0xff),
            boundary_circle: LineStyle {
                colour: gray_100,
                thickness: 1.0,
                dash: None,
            },
            month_separator: LineStyle {
                colour: gray_200,
                thickness: 1.0,
                dash: Some((4.0, 4.0)),
            },
            month_label: gray_500,
            ring_outline: LineStyle {
                colour: Colour::from_rgb(0xf9, 0xfa, 0xfb),
                thickness: 1.0,
                dash: None,
            },
            today: LineStyle {
                colour: red_500,
                thickness: 2.0,
                dash: Some((4.0, 2.0)),
            },
            centre_title: Colour::from_rgb(0x1f, 0x29, 0x37),
            centre_subtitle: gray_500,
            sector_opacity: 0.7,
        }
    }
}
