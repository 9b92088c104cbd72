//! Julian dates from calendar timestamps, original and corrected.
//!
//! Two algorithms coexist behind [`JulianVariant`]:
//! - [`JulianVariant::DayCount`]: the toolkit's original conversion, a
//!   linear proleptic-Gregorian day count from 0001-01-01 plus a fixed
//!   offset. It ignores the zone designation and the 1582 calendar
//!   reform, so it is biased for offset-local timestamps and for
//!   historical dates.
//! - [`JulianVariant::Meeus`]: Meeus, "Astronomical Algorithms",
//!   chapter 7. Normalizes to UTC and switches calendars at the
//!   1582-10-15 Gregorian reform.
//!
//! For modern UTC timestamps the two agree; the equivalence harness pins
//! both the agreement and the known divergences.

use kaksha_flags::{Flag, FlagSet};

use crate::calendar::civil_day_number;
use crate::timestamp::Timestamp;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of 0001-01-01T00:00 proleptic Gregorian, the anchor of
/// the linear day count.
const DAY_COUNT_EPOCH_JD: f64 = 1_721_425.5;

/// Which Julian date algorithm is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JulianVariant {
    /// Original linear day count, calendar- and zone-unaware.
    DayCount,
    /// Corrected calendar-aware algorithm after Meeus.
    Meeus,
}

impl JulianVariant {
    /// Resolve the active variant from a flag set.
    pub fn select(flags: FlagSet) -> Self {
        if flags.get(Flag::JulianDateAlgorithm) {
            Self::Meeus
        } else {
            Self::DayCount
        }
    }

    /// Julian Date of `ts` under this algorithm.
    pub fn julian_date(self, ts: &Timestamp) -> f64 {
        match self {
            Self::DayCount => day_count_jd(ts),
            Self::Meeus => meeus_jd(ts),
        }
    }

    /// Julian centuries from J2000.0 at `ts`.
    pub fn centuries_since_j2000(self, ts: &Timestamp) -> f64 {
        (self.julian_date(ts) - J2000_JD) / DAYS_PER_CENTURY
    }
}

/// Fraction of a day elapsed at h:m:s.
fn day_fraction(hour: u32, minute: u32, second: f64) -> f64 {
    f64::from(hour) / 24.0 + f64::from(minute) / 1440.0 + second / 86_400.0
}

/// Fields are taken as-is whatever the designation; the original
/// conversion never consulted it.
fn day_count_jd(ts: &Timestamp) -> f64 {
    let days = civil_day_number(ts.year, ts.month, ts.day) as f64;
    days + day_fraction(ts.hour, ts.minute, ts.second) + DAY_COUNT_EPOCH_JD
}

/// True for calendar dates on or after the 1582-10-15 Gregorian reform.
///
/// `day` carries the time-of-day fraction, so the cutover lands exactly
/// on the reform midnight.
fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    if year != 1582 {
        return year > 1582;
    }
    if month != 10 {
        return month > 10;
    }
    day >= 15.0
}

fn meeus_jd(ts: &Timestamp) -> f64 {
    let (year, month, day, hour, minute, second) = ts.utc_fields();
    let day = f64::from(day) + day_fraction(hour, minute, second);

    // January and February count as months 13 and 14 of the prior year.
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let b = if is_gregorian(year, month, day) {
        let a = y.div_euclid(100);
        2 - a + a.div_euclid(4)
    } else {
        0
    };

    (365.25 * (f64::from(y) + 4716.0)).floor()
        + (30.6001 * f64::from(m + 1)).floor()
        + day
        + f64::from(b)
        - 1524.5
}
