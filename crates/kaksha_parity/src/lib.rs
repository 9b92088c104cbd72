//! Equivalence and wall-clock harness over the dual-path kernels.
//!
//! This crate provides:
//! - [`Agreement`] policies and [`ParityReport`] outcome types
//! - Reference fixtures with independently published values
//! - Report drivers comparing kernel variants ([`checks`])
//! - A coarse wall-clock comparison ([`bench`])
//!
//! The harness keeps two questions apart that flag layers tend to blur:
//! whether the variants compute the same thing (the reports, with
//! documented divergences pinned to their expected size) and which one
//! is faster (the timing, which asserts nothing about correctness).

pub mod bench;
pub mod checks;
pub mod fixtures;
pub mod report;

pub use bench::{BenchComparison, VariantCost, julian_comparison, power_comparisons, time_call};
pub use checks::{
    gst_reference_report, julian_agreement_report, julian_divergence_report,
    julian_reference_report, power_parity_report, standard_reports,
};
pub use report::{Agreement, ParityCase, ParityReport};
