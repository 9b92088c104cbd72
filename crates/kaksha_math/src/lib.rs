//! Numeric kernels with selectable implementations.
//!
//! This crate provides:
//! - Dual-path exponentiation ([`PowVariant`]): the original general
//!   `powf` calls next to specialized multiplication forms for the fixed
//!   exponents the propagation equations use
//! - Angle wrapping helpers shared by the time and observation layers
//!
//! Variant selection is resolved once from a [`kaksha_flags::FlagSet`]
//! and carried as a plain enum value, so hot loops branch on an enum
//! rather than re-querying configuration.

pub mod angle;
pub mod pow;

pub use angle::{angular_separation_rad, wrap_two_pi};
pub use pow::{EXPONENT_MATCH_TOLERANCE, PowVariant, TWO_THIRDS};
