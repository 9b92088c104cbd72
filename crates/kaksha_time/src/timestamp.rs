//! Calendar date-time with an explicit zone designation.

use std::fmt::{Display, Formatter};

use crate::calendar::{civil_date, civil_day_number};
use crate::error::TimeError;

/// How a [`Timestamp`]'s calendar fields relate to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeKind {
    /// Fields are UTC.
    Utc,
    /// Fields are local to a fixed offset east of UTC, in minutes.
    UtcOffset { minutes: i32 },
    /// No zone information was recorded.
    Unspecified,
}

/// Calendar date-time with sub-second precision and a zone designation.
///
/// Fields are plain calendar values; nothing is normalized on
/// construction. Conversions that need UTC either shift the fields by
/// the recorded offset or, for [`TimeKind::Unspecified`], refuse via
/// [`Timestamp::to_strict_utc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub kind: TimeKind,
}

impl Timestamp {
    /// UTC timestamp.
    pub const fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            kind: TimeKind::Utc,
        }
    }

    /// Timestamp local to a fixed offset east of UTC, in minutes.
    pub const fn with_offset(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        offset_minutes: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            kind: TimeKind::UtcOffset {
                minutes: offset_minutes,
            },
        }
    }

    /// Timestamp with no zone designation.
    pub const fn unspecified(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            kind: TimeKind::Unspecified,
        }
    }

    /// Normalize to UTC, failing when the zone designation is missing.
    ///
    /// [`TimeKind::Unspecified`] values error instead of being silently
    /// reinterpreted; callers that know the zone attach it first.
    pub fn to_strict_utc(&self) -> Result<Self, TimeError> {
        match self.kind {
            TimeKind::Unspecified => Err(TimeError::UnspecifiedKind),
            TimeKind::Utc | TimeKind::UtcOffset { .. } => {
                let (year, month, day, hour, minute, second) = self.utc_fields();
                Ok(Self {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                    second,
                    kind: TimeKind::Utc,
                })
            }
        }
    }

    /// Calendar fields shifted to UTC.
    ///
    /// [`TimeKind::Unspecified`] fields are taken as already UTC here;
    /// only [`Timestamp::to_strict_utc`] rejects them.
    pub(crate) fn utc_fields(&self) -> (i32, u32, u32, u32, u32, f64) {
        match self.kind {
            TimeKind::Utc | TimeKind::Unspecified => (
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                self.second,
            ),
            TimeKind::UtcOffset { minutes } => self.shifted_by_minutes(-i64::from(minutes)),
        }
    }

    fn shifted_by_minutes(&self, delta: i64) -> (i32, u32, u32, u32, u32, f64) {
        let total = i64::from(self.hour) * 60 + i64::from(self.minute) + delta;
        let day_shift = total.div_euclid(1440);
        let of_day = total.rem_euclid(1440);
        let (year, month, day) =
            civil_date(civil_day_number(self.year, self.month, self.day) + day_shift);
        (
            year,
            month,
            day,
            (of_day / 60) as u32,
            (of_day % 60) as u32,
            self.second,
        )
    }

    /// Round to the nearest multiple of `granularity_s` seconds within
    /// the day, half up.
    ///
    /// Granularities must be positive and at most one day; the zone
    /// designation is preserved. Rounding up from the last instants of a
    /// day rolls over to the next day's midnight.
    pub fn round_to(&self, granularity_s: f64) -> Self {
        if granularity_s <= 0.0 {
            return *self;
        }
        let of_day = f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second;
        let rounded = ((of_day + granularity_s / 2.0) / granularity_s).floor() * granularity_s;
        let (day_shift, of_day) = if rounded >= 86_400.0 {
            (1, rounded - 86_400.0)
        } else {
            (0, rounded)
        };
        let (year, month, day) =
            civil_date(civil_day_number(self.year, self.month, self.day) + day_shift);
        let hour = (of_day / 3600.0).floor();
        let minute = ((of_day - hour * 3600.0) / 60.0).floor();
        let second = of_day - hour * 3600.0 - minute * 60.0;
        Self {
            year,
            month,
            day,
            hour: hour as u32,
            minute: minute as u32,
            second,
            kind: self.kind,
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )?;
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )?;
        }
        match self.kind {
            TimeKind::Utc => f.write_str("Z"),
            TimeKind::UtcOffset { minutes } => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let mag = minutes.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", mag / 60, mag % 60)
            }
            TimeKind::Unspecified => Ok(()),
        }
    }
}
