//! Wall-clock comparison of kernel variants.
//!
//! Coarse `Instant` loops for a quick ratio read-out; the criterion
//! benches in the kernel crates are the precise measurement. Timing
//! asserts nothing about correctness; the reports in [`crate::checks`]
//! do that.

use std::fmt::{Display, Formatter};
use std::hint::black_box;
use std::time::{Duration, Instant};

use kaksha_math::PowVariant;
use kaksha_time::{JulianVariant, Timestamp};

/// Wall-clock cost of one variant over a fixed iteration count.
#[derive(Debug, Clone)]
pub struct VariantCost {
    pub label: &'static str,
    pub total: Duration,
    pub iterations: u32,
}

impl VariantCost {
    /// Mean cost per call.
    pub fn per_call(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.total / self.iterations
    }
}

/// Paired costs of the original and reworked variant of one kernel.
#[derive(Debug, Clone)]
pub struct BenchComparison {
    pub name: &'static str,
    pub original: VariantCost,
    pub reworked: VariantCost,
}

impl BenchComparison {
    /// Original time over reworked time; above 1.0 the rework is faster.
    pub fn speedup(&self) -> f64 {
        let reworked = self.reworked.total.as_secs_f64();
        if reworked == 0.0 {
            return f64::INFINITY;
        }
        self.original.total.as_secs_f64() / reworked
    }
}

impl Display for BenchComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {:.1} ns/call, {} {:.1} ns/call, ratio {:.2}",
            self.name,
            self.original.label,
            self.original.per_call().as_secs_f64() * 1e9,
            self.reworked.label,
            self.reworked.per_call().as_secs_f64() * 1e9,
            self.speedup()
        )
    }
}

/// Time `f` over `iterations` calls, folding results into an accumulator
/// the optimizer cannot discard.
pub fn time_call<F>(label: &'static str, iterations: u32, mut f: F) -> VariantCost
where
    F: FnMut() -> f64,
{
    let start = Instant::now();
    let mut acc = 0.0;
    for _ in 0..iterations {
        acc += black_box(f());
    }
    let total = start.elapsed();
    black_box(acc);
    VariantCost {
        label,
        total,
        iterations,
    }
}

/// Compare the power kernels exponent by exponent.
pub fn power_comparisons(iterations: u32) -> Vec<BenchComparison> {
    let x = black_box(6.6228);
    let pairs: [(&'static str, fn(PowVariant, f64) -> f64); 6] = [
        ("pow2", PowVariant::pow2),
        ("pow3", PowVariant::pow3),
        ("pow4", PowVariant::pow4),
        ("pow1_5", PowVariant::pow1_5),
        ("pow2_3", PowVariant::pow2_3),
        ("pow3_5", PowVariant::pow3_5),
    ];
    pairs
        .into_iter()
        .map(|(name, op)| BenchComparison {
            name,
            original: time_call("general", iterations, || op(PowVariant::General, x)),
            reworked: time_call("specialized", iterations, || op(PowVariant::Specialized, x)),
        })
        .collect()
}

/// Compare the two Julian date algorithms.
pub fn julian_comparison(iterations: u32) -> BenchComparison {
    let ts = Timestamp::utc(2019, 2, 3, 4, 5, 6.0);
    BenchComparison {
        name: "julian-date",
        original: time_call("day-count", iterations, || {
            JulianVariant::DayCount.julian_date(black_box(&ts))
        }),
        reworked: time_call("meeus", iterations, || {
            JulianVariant::Meeus.julian_date(black_box(&ts))
        }),
    }
}
