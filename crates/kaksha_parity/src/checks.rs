//! Equivalence drivers over the dual-path kernels.
//!
//! Validation, not benchmarking: the corrected Julian algorithm is held
//! to external references, the two Julian algorithms to each other where
//! the original is meaningful, and the power kernels variant against
//! variant across the operating domain. Documented divergences are
//! pinned to their expected size instead of being skipped.

use kaksha_math::PowVariant;
use kaksha_time::{JulianVariant, greenwich_sidereal_time_rad};

use crate::fixtures::{
    AGREEMENT_INSTANTS, GST_J2000_RAD, GST_J2000_TIMESTAMP, GST_TOLERANCE_RAD, JULIAN_REFERENCES,
    PRE_REFORM_GAPS, SPECIALIZED_EXPONENTS, power_sweep,
};
use crate::report::{Agreement, ParityCase, ParityReport};

/// Sub-millisecond bound for the modern-date Julian agreement check;
/// the only daylight between the algorithms there is summation order.
const JULIAN_AGREEMENT_TOL: f64 = 1e-8;

/// Bound on how far a pinned divergence may drift from its size.
const GAP_TOL: f64 = 1e-9;

/// Relative agreement contract for the power kernels.
const POWER_REL_TOL: f64 = 1e-9;

/// Corrected Julian algorithm against external reference values.
pub fn julian_reference_report() -> ParityReport {
    let mut report = ParityReport::new("julian-reference");
    for fixture in &JULIAN_REFERENCES {
        let jd = JulianVariant::Meeus.julian_date(&fixture.timestamp);
        report.record(ParityCase::new(
            fixture.label,
            fixture.jd,
            jd,
            Agreement::Absolute {
                tolerance: fixture.tolerance,
            },
        ));
    }
    report
}

/// Original against corrected Julian algorithm on modern UTC instants,
/// where the original is unbiased.
pub fn julian_agreement_report() -> ParityReport {
    let mut report = ParityReport::new("julian-agreement");
    for ts in &AGREEMENT_INSTANTS {
        let original = JulianVariant::DayCount.julian_date(ts);
        let corrected = JulianVariant::Meeus.julian_date(ts);
        report.record(ParityCase::new(
            format!("julian variants at {ts}"),
            original,
            corrected,
            Agreement::Absolute {
                tolerance: JULIAN_AGREEMENT_TOL,
            },
        ));
    }
    report
}

/// Pre-reform instants where the algorithms must disagree by an exact,
/// documented number of days.
pub fn julian_divergence_report() -> ParityReport {
    let mut report = ParityReport::new("julian-divergence");
    for fixture in &PRE_REFORM_GAPS {
        let original = JulianVariant::DayCount.julian_date(&fixture.timestamp);
        let corrected = JulianVariant::Meeus.julian_date(&fixture.timestamp);
        report.record(ParityCase::new(
            fixture.label,
            fixture.gap_days,
            corrected - original,
            Agreement::Absolute { tolerance: GAP_TOL },
        ));
    }
    report
}

/// Sidereal time at the reference instant under both Julian paths,
/// compared on the circle.
pub fn gst_reference_report() -> ParityReport {
    let mut report = ParityReport::new("gst-reference");
    for variant in [JulianVariant::DayCount, JulianVariant::Meeus] {
        let gst = greenwich_sidereal_time_rad(variant, &GST_J2000_TIMESTAMP);
        report.record(ParityCase::new(
            format!("gst at J2000 noon via {variant:?}"),
            GST_J2000_RAD,
            gst,
            Agreement::Angular {
                tolerance: GST_TOLERANCE_RAD,
            },
        ));
    }
    report
}

/// General against specialized power forms across the operating domain,
/// both the fixed entry points and the exponent dispatcher.
pub fn power_parity_report() -> ParityReport {
    let mut report = ParityReport::new("power-parity");
    let g = PowVariant::General;
    let s = PowVariant::Specialized;
    let rel = Agreement::Relative {
        tolerance: POWER_REL_TOL,
    };
    for x in power_sweep() {
        report.record(ParityCase::new(format!("pow2 at x = {x}"), g.pow2(x), s.pow2(x), rel));
        report.record(ParityCase::new(format!("pow3 at x = {x}"), g.pow3(x), s.pow3(x), rel));
        report.record(ParityCase::new(format!("pow4 at x = {x}"), g.pow4(x), s.pow4(x), rel));
        report.record(ParityCase::new(format!("pow1_5 at x = {x}"), g.pow1_5(x), s.pow1_5(x), rel));
        report.record(ParityCase::new(format!("pow2_3 at x = {x}"), g.pow2_3(x), s.pow2_3(x), rel));
        report.record(ParityCase::new(format!("pow3_5 at x = {x}"), g.pow3_5(x), s.pow3_5(x), rel));
        for n in SPECIALIZED_EXPONENTS {
            report.record(ParityCase::new(
                format!("pow dispatch at x = {x}, n = {n}"),
                g.pow(x, n),
                s.pow(x, n),
                rel,
            ));
        }
    }
    report
}

/// The full harness, reference checks first.
pub fn standard_reports() -> Vec<ParityReport> {
    vec![
        julian_reference_report(),
        julian_agreement_report(),
        julian_divergence_report(),
        gst_reference_report(),
        power_parity_report(),
    ]
}
