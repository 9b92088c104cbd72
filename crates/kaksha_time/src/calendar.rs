//! Proleptic-Gregorian civil calendar arithmetic.
//!
//! Day numbers count from 0001-01-01 (day 0), the epoch the original
//! linear day count is anchored to. The conversions are the standard
//! era-based civil calendar algorithms, exact over the full `i32` year
//! range.

/// Days from 0001-01-01 to 1970-01-01 in the proleptic Gregorian calendar.
const DAYS_TO_UNIX_EPOCH: i64 = 719_162;

/// Day number of a civil date, with day 0 = 0001-01-01.
pub fn civil_day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + DAYS_TO_UNIX_EPOCH
}

/// Civil date of a day number, inverse of [`civil_day_number`].
pub fn civil_date(day_number: i64) -> (i32, u32, u32) {
    let z = day_number - DAYS_TO_UNIX_EPOCH + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = y + i64::from(month <= 2);
    (year as i32, month, day)
}
