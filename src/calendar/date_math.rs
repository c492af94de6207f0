//! Calendar arithmetic helpers.
//!
//! Pure date functions shared by the frequency-specific window finders.
//! No timezone conversion happens anywhere in this module.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a month.
///
/// `month` is 1-based, as returned by [`Datelike::month`].
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2026, 2), 28);
/// assert_eq!(days_in_month(2026, 4), 30);
/// assert_eq!(days_in_month(2026, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns `day` of the given month, clamped to the month's last day.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::clamp_day_of_month;
/// use chrono::NaiveDate;
///
/// let date = clamp_day_of_month(2026, 4, 31).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
/// ```
pub fn clamp_day_of_month(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::CalculationError {
        message: format!("{}-{:02}-{:02} is not a valid date", year, month, day),
    })
}

/// Returns the (year, month) following the given one.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Returns the (year, month) preceding the given one.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns the last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> EngineResult<NaiveDate> {
    clamp_day_of_month(date.year(), date.month(), 31)
}

/// Walks backward from `date` to the most recent `weekday`, inclusive.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::most_recent_weekday;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2026-01-14 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(
///     most_recent_weekday(wednesday, Weekday::Mon).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
/// );
/// assert_eq!(most_recent_weekday(wednesday, Weekday::Wed).unwrap(), wednesday);
/// ```
pub fn most_recent_weekday(date: NaiveDate, weekday: Weekday) -> EngineResult<NaiveDate> {
    let back = (7 + date.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    sub_days(date, u64::from(back))
}

/// Adds calendar days to a date.
pub fn add_days(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} + {} days is out of range", date, days),
        })
}

/// Subtracts calendar days from a date.
pub fn sub_days(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} - {} days is out of range", date, days),
        })
}
