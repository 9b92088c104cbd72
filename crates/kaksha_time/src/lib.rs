//! Calendar timestamps, Julian dates, and sidereal time.
//!
//! This crate provides:
//! - [`Timestamp`]: calendar date-time with an explicit zone designation
//! - Dual-path Julian dates ([`JulianVariant`]): the toolkit's original
//!   linear day count next to the corrected Meeus algorithm
//! - Greenwich and local mean sidereal time on either Julian path
//!
//! Which path runs is resolved once from a [`kaksha_flags::FlagSet`] via
//! [`JulianVariant::select`]; the conversions themselves are pure.

pub mod calendar;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod timestamp;

pub use calendar::{civil_date, civil_day_number};
pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, JulianVariant};
pub use sidereal::{greenwich_sidereal_time_rad, local_mean_sidereal_time_rad};
pub use timestamp::{TimeKind, Timestamp};
