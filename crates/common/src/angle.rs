use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Camera azimuth in radians.
///
/// The raw value is free-running so that drags and snap animations never
/// jump across the 0/2π seam. Anything that needs a canonical angle goes
/// through [`Azimuth::normalized`] or [`Azimuth::quadrant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Azimuth(f32);

impl Azimuth {
    pub const fn new(radians: f32) -> Self {
        Self(radians)
    }

    /// Unbounded raw value.
    pub fn radians(self) -> f32 {
        self.0
    }

    /// Canonical value in `[0, 2π)`.
    pub fn normalized(self) -> f32 {
        let t = self.0.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if t >= TAU { 0.0 } else { t }
    }

    /// Nearest quarter turn of the normalised angle, in `0..4`.
    pub fn quadrant(self) -> u8 {
        ((self.normalized() / FRAC_PI_2).round() as u32 % 4) as u8
    }

    /// Nearest multiple of `step` to the raw value.
    pub fn snapped(self, step: f32) -> Self {
        Self((self.0 / step).round() * step)
    }

    /// Whether the raw value lies on a multiple of `step` within `tolerance`.
    pub fn is_aligned(self, step: f32, tolerance: f32) -> bool {
        let turns = self.0 / step;
        (turns - turns.round()).abs() <= tolerance
    }
}

impl From<f32> for Azimuth {
    fn from(radians: f32) -> Self {
        Self(radians)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn normalized_wraps_negative_and_large_values() {
        assert!((Azimuth::new(-FRAC_PI_2).normalized() - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!((Azimuth::new(5.0 * PI).normalized() - PI).abs() < 1e-5);
        let n = Azimuth::new(-1e-9).normalized();
        assert!((0.0..TAU).contains(&n));
    }

    #[test]
    fn quadrant_rounds_to_nearest_quarter() {
        assert_eq!(Azimuth::new(0.0).quadrant(), 0);
        assert_eq!(Azimuth::new(0.2).quadrant(), 0);
        assert_eq!(Azimuth::new(FRAC_PI_2 + 0.3).quadrant(), 1);
        assert_eq!(Azimuth::new(PI).quadrant(), 2);
        assert_eq!(Azimuth::new(-FRAC_PI_2).quadrant(), 3);
        // Just below a full turn rounds back to quadrant 0.
        assert_eq!(Azimuth::new(TAU - 0.1).quadrant(), 0);
        assert_eq!(Azimuth::new(7.0 * TAU + FRAC_PI_2).quadrant(), 1);
    }

    #[test]
    fn snapping_is_idempotent() {
        let once = Azimuth::new(2.3).snapped(FRAC_PI_2);
        let twice = once.snapped(FRAC_PI_2);
        assert_eq!(once.radians().to_bits(), twice.radians().to_bits());
        assert!(once.is_aligned(FRAC_PI_2, 1e-5));
    }

    #[test]
    fn snapping_keeps_unbounded_winding() {
        let a = Azimuth::new(-8.0).snapped(FRAC_PI_2);
        assert!(a.radians() < -TAU);
        assert_eq!(a.quadrant(), 3);
        assert!(a.is_aligned(FRAC_PI_2, 1e-5));
    }
}
