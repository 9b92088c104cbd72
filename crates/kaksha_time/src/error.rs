//! Error types for timestamp normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from timestamp handling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The timestamp carries no zone designation and cannot be safely
    /// normalized to UTC.
    UnspecifiedKind,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnspecifiedKind => {
                write!(f, "timestamp kind is unspecified and cannot be safely converted to UTC")
            }
        }
    }
}

impl Error for TimeError {}
