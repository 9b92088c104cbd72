//! Golden-value tests for sidereal time against the reference value the
//! original toolkit's regression data pinned.

use std::f64::consts::TAU;

use kaksha_math::angular_separation_rad;
use kaksha_time::{
    JulianVariant, Timestamp, greenwich_sidereal_time_rad, local_mean_sidereal_time_rad,
};

/// GST at J2000.0 noon, radians.
const GST_J2000_RAD: f64 = 4.894_961_212_823_059;

#[test]
fn gst_reference_under_both_julian_paths() {
    // Angles compare on the circle; a value wrapped across 2π is still
    // the same sidereal time.
    let ts = Timestamp::utc(2000, 1, 1, 12, 0, 0.0);
    for variant in [JulianVariant::DayCount, JulianVariant::Meeus] {
        let gst = greenwich_sidereal_time_rad(variant, &ts);
        let sep = angular_separation_rad(gst, GST_J2000_RAD);
        assert!(sep < 1e-3, "{variant:?}: GST = {gst}, separation = {sep}");
    }
}

#[test]
fn gst_is_periodic_in_sidereal_days() {
    // 86164.0905 s is one mean sidereal day; GST returns to itself.
    let t0 = Timestamp::utc(2019, 2, 3, 4, 5, 6.0);
    let t1 = Timestamp::utc(2019, 2, 4, 4, 1, 10.0905);
    let g0 = greenwich_sidereal_time_rad(JulianVariant::Meeus, &t0);
    let g1 = greenwich_sidereal_time_rad(JulianVariant::Meeus, &t1);
    assert!(angular_separation_rad(g0, g1) < 1e-5, "g0 = {g0}, g1 = {g1}");
}

#[test]
fn lmst_at_a_western_site() {
    // 122.03°W: LMST trails GST by 2.13 rad on the circle.
    let ts = Timestamp::utc(2019, 2, 3, 4, 5, 6.0);
    let lon = (-122.03f64).to_radians();
    let gst = greenwich_sidereal_time_rad(JulianVariant::Meeus, &ts);
    let lmst = local_mean_sidereal_time_rad(JulianVariant::Meeus, &ts, lon);
    assert!((lmst - (gst + lon).rem_euclid(TAU)).abs() < 1e-12);
    assert!((0.0..TAU).contains(&lmst));
}

#[test]
fn lmst_full_turn_is_identity() {
    let ts = Timestamp::utc(2019, 2, 3, 4, 5, 6.0);
    let base = local_mean_sidereal_time_rad(JulianVariant::Meeus, &ts, 0.4);
    let turned = local_mean_sidereal_time_rad(JulianVariant::Meeus, &ts, 0.4 + TAU);
    assert!(angular_separation_rad(base, turned) < 1e-12);
}
