//! Angle wrapping helpers.

use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians to [0, 2π).
pub fn wrap_two_pi(rad: f64) -> f64 {
    rad.rem_euclid(TAU)
}

/// Shortest separation between two angles in radians, in [0, π].
///
/// Inputs need not be pre-wrapped; full turns between them are ignored.
pub fn angular_separation_rad(a_rad: f64, b_rad: f64) -> f64 {
    let d = (a_rad - b_rad).rem_euclid(TAU);
    if d > PI { TAU - d } else { d }
}
