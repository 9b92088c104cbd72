//! Reference fixtures for the equivalence checks.
//!
//! Everything here is a literal, independent of any flag state. The
//! Julian references are published values (J2000.0, the 1900 epoch, and
//! the regression instants the toolkit has always pinned); the sidereal
//! reference is the textbook rotation angle at J2000.0 noon; the
//! divergence gaps are the exact calendar discrepancies the original
//! Julian algorithm carries before the Gregorian reform.

use kaksha_math::TWO_THIRDS;
use kaksha_time::Timestamp;

/// An instant with an independently published Julian date.
#[derive(Debug, Clone, Copy)]
pub struct JulianFixture {
    pub label: &'static str,
    pub timestamp: Timestamp,
    pub jd: f64,
    /// Published precision of the reference value, in days.
    pub tolerance: f64,
}

pub const JULIAN_REFERENCES: [JulianFixture; 4] = [
    JulianFixture {
        label: "J2000.0 epoch",
        timestamp: Timestamp::utc(2000, 1, 1, 12, 0, 0.0),
        jd: 2_451_545.0,
        tolerance: 1e-4,
    },
    JulianFixture {
        label: "1900 epoch",
        timestamp: Timestamp::utc(1900, 1, 1, 12, 0, 0.0),
        jd: 2_415_021.0,
        tolerance: 1e-4,
    },
    JulianFixture {
        label: "regression instant 2019-02-03",
        timestamp: Timestamp::utc(2019, 2, 3, 4, 5, 6.0),
        jd: 2_458_517.670_208_333_3,
        tolerance: 1e-4,
    },
    JulianFixture {
        label: "2020 new year",
        timestamp: Timestamp::utc(2020, 1, 1, 0, 0, 0.0),
        jd: 2_458_849.5,
        tolerance: 1e-4,
    },
];

/// A pre-reform instant with the exact day gap between the two Julian
/// algorithms (proleptic-Gregorian day count minus Julian calendar).
#[derive(Debug, Clone, Copy)]
pub struct GapFixture {
    pub label: &'static str,
    pub timestamp: Timestamp,
    /// Expected corrected-minus-original Julian date difference, days.
    pub gap_days: f64,
}

pub const PRE_REFORM_GAPS: [GapFixture; 2] = [
    GapFixture {
        label: "nine-day gap at 1500-01-01",
        timestamp: Timestamp::utc(1500, 1, 1, 12, 0, 0.0),
        gap_days: 9.0,
    },
    GapFixture {
        label: "one-day gap at 333-01-27",
        timestamp: Timestamp::utc(333, 1, 27, 12, 0, 0.0),
        gap_days: 1.0,
    },
];

/// Modern UTC instants where both Julian algorithms are unbiased.
pub const AGREEMENT_INSTANTS: [Timestamp; 5] = [
    Timestamp::utc(1972, 1, 1, 0, 0, 0.0),
    Timestamp::utc(1999, 12, 31, 23, 59, 59.0),
    Timestamp::utc(2006, 6, 21, 18, 45, 30.5),
    Timestamp::utc(2019, 2, 3, 4, 5, 6.0),
    Timestamp::utc(2038, 1, 19, 3, 14, 8.0),
];

/// GST at J2000.0 noon, radians.
pub const GST_J2000_RAD: f64 = 4.894_961_212_823_059;

/// Instant of the GST reference.
pub const GST_J2000_TIMESTAMP: Timestamp = Timestamp::utc(2000, 1, 1, 12, 0, 0.0);

/// Published precision of the GST reference, radians, compared on the
/// circle.
pub const GST_TOLERANCE_RAD: f64 = 1e-3;

/// Exponents with specialized forms, in dispatcher order.
pub const SPECIALIZED_EXPONENTS: [f64; 6] = [2.0, 3.0, 4.0, 1.5, 3.5, TWO_THIRDS];

/// Bases 0 to 100 in steps of 0.5, the range radii and dimensionless
/// ratios actually cover.
pub fn power_sweep() -> impl Iterator<Item = f64> {
    (0..=200).map(|i| f64::from(i) * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_covers_the_domain() {
        let xs: Vec<f64> = power_sweep().collect();
        assert_eq!(xs.len(), 201);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[200], 100.0);
        assert!((xs[1] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn references_are_modern_utc() {
        use kaksha_time::TimeKind;
        for fixture in &JULIAN_REFERENCES {
            assert_eq!(fixture.timestamp.kind, TimeKind::Utc, "{}", fixture.label);
            assert!(fixture.timestamp.year >= 1900, "{}", fixture.label);
        }
    }

    #[test]
    fn gaps_are_whole_days() {
        for fixture in &PRE_REFORM_GAPS {
            assert_eq!(fixture.gap_days.fract(), 0.0, "{}", fixture.label);
            assert!(fixture.gap_days > 0.0, "{}", fixture.label);
        }
    }
}
