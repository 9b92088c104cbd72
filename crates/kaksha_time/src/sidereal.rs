//! Greenwich and local mean sidereal time.
//!
//! The rotation-angle polynomial is the GMST form the toolkit has always
//! used (arc-second coefficients; Astronomical Almanac / Vallado). It is
//! evaluated at the Julian date produced by the active [`JulianVariant`],
//! so the Julian-date flag propagates into sidereal time.

use kaksha_math::wrap_two_pi;

use crate::julian::JulianVariant;
use crate::timestamp::Timestamp;

/// Rotation angle in arc-seconds at `t` Julian centuries from J2000.0.
///
/// θ = 67310.54841 + (876600·3600 + 8640184.812866)·t
///     + 0.093104·t² − 0.0000062·t³
fn rotation_angle_arcsec(t: f64) -> f64 {
    67_310.54841
        + (876_600.0 * 3600.0 + 8_640_184.812866) * t
        + 0.093104 * t * t
        - 0.0000062 * t * t * t
}

/// Greenwich Mean Sidereal Time at `ts` under the given Julian path.
///
/// Returns radians in [0, 2π).
pub fn greenwich_sidereal_time_rad(variant: JulianVariant, ts: &Timestamp) -> f64 {
    let t = variant.centuries_since_j2000(ts);
    let theta = rotation_angle_arcsec(t);
    // One arc-second of rotation is 1/240 of a degree (360° / 86400 s).
    wrap_two_pi((theta / 240.0).to_radians())
}

/// Local Mean Sidereal Time: GST plus observer east longitude.
///
/// Returns radians in [0, 2π).
pub fn local_mean_sidereal_time_rad(
    variant: JulianVariant,
    ts: &Timestamp,
    longitude_east_rad: f64,
) -> f64 {
    wrap_two_pi(greenwich_sidereal_time_rad(variant, ts) + longitude_east_rad)
}
