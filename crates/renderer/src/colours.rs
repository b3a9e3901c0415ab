// SPDX-License-Identifier: MIT

//!
//! The fixed colour of each academic area
//!

use crate::colour::Colour;
use yearwheel_core::Area;

/// The main colour for the area (used for highlighted/hovered items and the
/// legend)
pub fn area_colour(area: Area) -> Colour {
    match area {
        Area::Opptak => Colour::from_rgb(0x3b, 0x82, 0xf6),
        Area::Semesterstart => Colour::from_rgb(0x22, 0xc5, 0x5e),
        Area::Eksamen => Colour::from_rgb(0xef, 0x44, 0x44),
        Area::EmneOgPortefoljearbeid => Colour::from_rgb(0xa8, 0x55, 0xf7),
        Area::Internasjonalisering => Colour::from_rgb(0xf9, 0x73, 0x16),
        Area::Studieplanprosessen => Colour::from_rgb(0x08, 0x91, 0xb2),
        Area::Annet => Colour::from_rgb(0x6b, 0x72, 0x80),
    }
}

/// The darker shade used for items drawn in the year wheel
pub fn area_dark_colour(area: Area) -> Colour {
    match area {
        Area::Opptak => Colour::from_rgb(0x25, 0x63, 0xeb),
        Area::Semesterstart => Colour::from_rgb(0x16, 0xa3, 0x4a),
        Area::Eksamen => Colour::from_rgb(0xdc, 0x26, 0x26),
        Area::EmneOgPortefoljearbeid => Colour::from_rgb(0x93, 0x33, 0xea),
        Area::Internasjonalisering => Colour::from_rgb(0xea, 0x58, 0x0c),
        Area::Studieplanprosessen => Colour::from_rgb(0x0e, 0x74, 0x90),
        Area::Annet => Colour::from_rgb(0x4b, 0x55, 0x63),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn palette() {
        assert_eq!(area_colour(Area::Opptak).to_hex(), "#3b82f6");
        assert_eq!(area_dark_colour(Area::Annet).to_hex(), "#4b5563");

        // Every area has its own colour
        let mut colours: Vec<String> = Area::ALL.iter().map(|a| area_colour(*a).to_hex()).collect();
        colours.sort();
        colours.dedup();
        assert_eq!(colours.len(), Area::ALL.len());
    }
}
