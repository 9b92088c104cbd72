//! Agreement policies and outcome types for equivalence runs.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use kaksha_math::angular_separation_rad;

/// How two outputs are allowed to relate for a case to hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Agreement {
    /// |expected − actual| within `tolerance`.
    Absolute { tolerance: f64 },
    /// |expected − actual| within `tolerance` of the larger magnitude.
    Relative { tolerance: f64 },
    /// Shortest arc between the angles within `tolerance` radians.
    Angular { tolerance: f64 },
    /// Shortest arc within `tolerance` radians, or within `tolerance` of
    /// a half turn. Covers corrections that move an angle by exactly
    /// 180°, such as the azimuth quadrant fix.
    AngularOrHalfTurn { tolerance: f64 },
}

impl Agreement {
    /// Deviation of the pair under this policy, in the policy's units.
    pub fn deviation(self, expected: f64, actual: f64) -> f64 {
        match self {
            Self::Absolute { .. } => (expected - actual).abs(),
            Self::Relative { .. } => {
                if expected == actual {
                    0.0
                } else {
                    (expected - actual).abs() / expected.abs().max(actual.abs())
                }
            }
            Self::Angular { .. } => angular_separation_rad(expected, actual),
            Self::AngularOrHalfTurn { .. } => {
                let sep = angular_separation_rad(expected, actual);
                sep.min((sep - PI).abs())
            }
        }
    }

    /// Tolerance bound of this policy.
    pub fn tolerance(self) -> f64 {
        match self {
            Self::Absolute { tolerance }
            | Self::Relative { tolerance }
            | Self::Angular { tolerance }
            | Self::AngularOrHalfTurn { tolerance } => tolerance,
        }
    }

    /// Whether the pair agrees under this policy. Non-finite deviations
    /// (NaN on either side) never agree.
    pub fn holds(self, expected: f64, actual: f64) -> bool {
        let d = self.deviation(expected, actual);
        d.is_finite() && d <= self.tolerance()
    }
}

/// One compared output pair.
#[derive(Debug, Clone)]
pub struct ParityCase {
    /// What was compared, e.g. `pow2 at x = 4.5`.
    pub label: String,
    /// Reference-side value.
    pub expected: f64,
    /// Candidate-side value.
    pub actual: f64,
    /// Policy the pair is held to.
    pub agreement: Agreement,
}

impl ParityCase {
    pub fn new(label: impl Into<String>, expected: f64, actual: f64, agreement: Agreement) -> Self {
        Self {
            label: label.into(),
            expected,
            actual,
            agreement,
        }
    }

    /// Deviation under the case's policy.
    pub fn deviation(&self) -> f64 {
        self.agreement.deviation(self.expected, self.actual)
    }

    /// Whether the case is within tolerance.
    pub fn holds(&self) -> bool {
        self.agreement.holds(self.expected, self.actual)
    }
}

impl Display for ParityCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {:.12}, got {:.12}, deviation {:.3e} (tolerance {:.1e})",
            self.label,
            self.expected,
            self.actual,
            self.deviation(),
            self.agreement.tolerance()
        )
    }
}

/// Deviation-to-tolerance ratio, with NaN pushed to the top so broken
/// cases surface as worst.
fn severity(case: &ParityCase) -> f64 {
    let ratio = case.deviation() / case.agreement.tolerance();
    if ratio.is_nan() { f64::INFINITY } else { ratio }
}

/// Aggregated outcome of one equivalence run.
#[derive(Debug, Clone)]
pub struct ParityReport {
    name: &'static str,
    cases: Vec<ParityCase>,
}

impl ParityReport {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Add a compared pair to the report.
    pub fn record(&mut self, case: ParityCase) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[ParityCase] {
        &self.cases
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// Cases out of tolerance.
    pub fn failures(&self) -> Vec<&ParityCase> {
        self.cases.iter().filter(|c| !c.holds()).collect()
    }

    /// Whether every case held. An empty report passes.
    pub fn passed(&self) -> bool {
        self.cases.iter().all(ParityCase::holds)
    }

    /// Case with the largest deviation-to-tolerance ratio.
    pub fn worst(&self) -> Option<&ParityCase> {
        self.cases.iter().max_by(|a, b| {
            severity(a)
                .partial_cmp(&severity(b))
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl Display for ParityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let failed = self.cases.iter().filter(|c| !c.holds()).count();
        if failed == 0 {
            write!(f, "{}: {} cases, all within tolerance", self.name, self.total())
        } else {
            write!(f, "{}: {} of {} cases out of tolerance", self.name, failed, self.total())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn absolute_policy() {
        let policy = Agreement::Absolute { tolerance: 1e-4 };
        assert!(policy.holds(2_451_545.0, 2_451_545.000_05));
        assert!(!policy.holds(2_451_545.0, 2_451_545.001));
        assert!((policy.deviation(1.0, 1.25) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn relative_policy() {
        let policy = Agreement::Relative { tolerance: 1e-9 };
        assert!(policy.holds(1e6, 1e6 + 1e-4));
        assert!(!policy.holds(1e6, 1e6 + 1.0));
        assert!(policy.holds(0.0, 0.0), "exact zeros agree");
        assert!(!policy.holds(0.0, 1e-300), "zero against nonzero does not");
    }

    #[test]
    fn angular_policy_wraps() {
        let policy = Agreement::Angular { tolerance: 1e-3 };
        assert!(policy.holds(0.0001, TAU - 0.0001));
        assert!(policy.holds(4.894_961, 4.894_961 + TAU));
        assert!(!policy.holds(0.0, 0.5));
    }

    #[test]
    fn half_turn_policy_accepts_the_flip() {
        let policy = Agreement::AngularOrHalfTurn { tolerance: 1e-2 };
        // Quadrant-corrected azimuth: either unchanged or shifted by π.
        assert!(policy.holds(0.8, 0.8));
        assert!(policy.holds(0.8, 0.8 + PI));
        assert!(policy.holds(0.8 + PI, 0.8));
        assert!(policy.holds(5.9, 5.9 - PI));
        assert!(!policy.holds(0.8, 0.8 + PI / 2.0));
        assert!(!policy.holds(0.8, 1.3));
    }

    #[test]
    fn nan_never_holds() {
        for policy in [
            Agreement::Absolute { tolerance: 1.0 },
            Agreement::Relative { tolerance: 1.0 },
            Agreement::Angular { tolerance: 1.0 },
            Agreement::AngularOrHalfTurn { tolerance: 1.0 },
        ] {
            assert!(!policy.holds(f64::NAN, 1.0));
            assert!(!policy.holds(1.0, f64::NAN));
        }
    }

    #[test]
    fn report_aggregation() {
        let tol = Agreement::Absolute { tolerance: 0.1 };
        let mut report = ParityReport::new("demo");
        assert!(report.passed(), "empty report passes");

        report.record(ParityCase::new("good", 1.0, 1.05, tol));
        assert!(report.passed());
        assert_eq!(report.total(), 1);

        report.record(ParityCase::new("bad", 1.0, 1.5, tol));
        assert!(!report.passed());
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].label, "bad");
    }

    #[test]
    fn worst_ranks_by_severity_across_policies() {
        let mut report = ParityReport::new("demo");
        // 50% of tolerance vs 20% of tolerance; policies differ.
        report.record(ParityCase::new(
            "angular",
            0.0,
            0.05,
            Agreement::Angular { tolerance: 0.1 },
        ));
        report.record(ParityCase::new(
            "absolute",
            10.0,
            10.2,
            Agreement::Absolute { tolerance: 1.0 },
        ));
        let worst = report.worst().map(|c| c.label.as_str());
        assert_eq!(worst, Some("angular"));
    }

    #[test]
    fn report_display() {
        let tol = Agreement::Absolute { tolerance: 0.1 };
        let mut report = ParityReport::new("demo");
        report.record(ParityCase::new("good", 1.0, 1.0, tol));
        assert_eq!(report.to_string(), "demo: 1 cases, all within tolerance");

        report.record(ParityCase::new("bad", 1.0, 2.0, tol));
        assert_eq!(report.to_string(), "demo: 1 of 2 cases out of tolerance");
    }
}
