// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Round an f64 value to the nearest 0.01.  Used for coordinates written out
/// as text so that float noise doesn't leak into the output.
pub(crate) fn round_f64_to_nearest_0_01(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid writing out "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Clamp an angle into the drawable range `0..=360`
pub(crate) fn clamp_angle(angle: f64) -> f64 {
    angle.clamp(0.0, 360.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_f64_to_nearest_0_01() {
        assert_eq!(round_f64_to_nearest_0_01(1.234), 1.23);
        assert_eq!(round_f64_to_nearest_0_01(1.235_1), 1.24);
        assert_eq!(round_f64_to_nearest_0_01(-0.001), 0.0);
        assert!(round_f64_to_nearest_0_01(-0.001).is_sign_positive());
    }

    #[test]
    fn test_clamp_angle() {
        assert_eq!(clamp_angle(-12.0), 0.0);
        assert_eq!(clamp_angle(180.0), 180.0);
        assert_eq!(clamp_angle(371.0), 360.0);
    }
}
