//! WEEKLY and BIWEEKLY period windows.
//!
//! Weekly windows start on the most recent occurrence of the plan's start
//! weekday. Biweekly windows are aligned to an anchor date so that the same
//! 14-day boundaries come out regardless of which "today" is queried. Plans
//! without an explicit anchor share the fixed epoch [`biweekly_epoch`].

use chrono::{Duration, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DayOfWeek};

use super::date_math::{add_days, most_recent_weekday};
use super::window::{PeriodWindow, PeriodWindowResult};

/// Days in a WEEKLY window.
pub const WEEKLY_PERIOD_DAYS: u64 = 7;

/// Days in a BIWEEKLY window.
pub const BIWEEKLY_PERIOD_DAYS: u64 = 14;

/// The fixed BIWEEKLY alignment epoch: Monday 1970-01-05.
pub fn biweekly_epoch() -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 5).ok_or_else(|| EngineError::CalculationError {
        message: "biweekly epoch is not a valid date".to_string(),
    })
}

/// Resolves the anchor date for a BIWEEKLY plan.
///
/// An explicit anchor wins. Otherwise the anchor is the first `weekday` on or
/// after [`biweekly_epoch`], so every plan starting on the same weekday shares
/// the same boundaries.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::resolve_biweekly_anchor;
/// use chrono::{NaiveDate, Weekday};
///
/// let anchor = resolve_biweekly_anchor(Weekday::Fri, None).unwrap();
/// assert_eq!(anchor, NaiveDate::from_ymd_opt(1970, 1, 9).unwrap());
/// ```
pub fn resolve_biweekly_anchor(
    weekday: Weekday,
    anchor_date: Option<NaiveDate>,
) -> EngineResult<NaiveDate> {
    match anchor_date {
        Some(anchor) => Ok(anchor),
        None => add_days(
            biweekly_epoch()?,
            u64::from(weekday.num_days_from_monday()),
        ),
    }
}

/// Finds the WEEKLY window containing `date`.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::weekly_window;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2026-01-14 is a Wednesday
/// let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let result = weekly_window(today, Weekday::Mon, 1).unwrap();
///
/// assert_eq!(result.window.start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(result.window.end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn weekly_window(
    date: NaiveDate,
    weekday: Weekday,
    step_number: u32,
) -> EngineResult<PeriodWindowResult> {
    let start = most_recent_weekday(date, weekday)?;
    let end = add_days(start, WEEKLY_PERIOD_DAYS - 1)?;
    let window = PeriodWindow { start, end };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_window".to_string(),
        rule_name: "Weekly Period Window".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "period_start_day_of_week": DayOfWeek::from(weekday).to_string(),
        }),
        output: serde_json::json!({
            "period_start": start.to_string(),
            "period_end": end.to_string(),
        }),
        reasoning: format!(
            "Most recent {} on or before {} is {}; period runs {} to {}",
            DayOfWeek::from(weekday),
            date,
            start,
            start,
            end
        ),
    };

    Ok(PeriodWindowResult { window, audit_step })
}

/// Finds the BIWEEKLY window containing `date`, aligned to `anchor`.
///
/// Window starts are `anchor + 14k` days for integer `k`, including negative
/// `k` for dates before the anchor.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::biweekly_window;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
/// let result = biweekly_window(today, anchor, 1).unwrap();
///
/// assert_eq!(result.window.start, NaiveDate::from_ymd_opt(2026, 1, 19).unwrap());
/// assert_eq!(result.window.end, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// ```
pub fn biweekly_window(
    date: NaiveDate,
    anchor: NaiveDate,
    step_number: u32,
) -> EngineResult<PeriodWindowResult> {
    let period_days = BIWEEKLY_PERIOD_DAYS as i64;
    let periods_from_anchor = (date - anchor).num_days().div_euclid(period_days);
    let start = anchor
        .checked_add_signed(Duration::days(periods_from_anchor * period_days))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("biweekly window for {} is out of range", date),
        })?;
    let end = add_days(start, BIWEEKLY_PERIOD_DAYS - 1)?;
    let window = PeriodWindow { start, end };

    let audit_step = AuditStep {
        step_number,
        rule_id: "biweekly_window".to_string(),
        rule_name: "Biweekly Period Window".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "anchor_date": anchor.to_string(),
        }),
        output: serde_json::json!({
            "period_start": start.to_string(),
            "period_end": end.to_string(),
            "periods_from_anchor": periods_from_anchor,
        }),
        reasoning: format!(
            "{} is {} biweekly period(s) from anchor {}; period runs {} to {}",
            date, periods_from_anchor, anchor, start, end
        ),
    };

    Ok(PeriodWindowResult { window, audit_step })
}
