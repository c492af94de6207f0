//! MONTHLY period windows.
//!
//! A monthly window runs from the plan's start day in one month to the day
//! before the start day in the following month. Start days past the end of a
//! shorter month are clamped to that month's last day.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::date_math::{clamp_day_of_month, next_month, previous_month, sub_days};
use super::window::{PeriodWindow, PeriodWindowResult};

/// Finds the MONTHLY window containing `date` for a plan starting on `start_day`.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::monthly_window;
/// use chrono::NaiveDate;
///
/// // Start day 31 clamps to April 30
/// let today = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
/// let result = monthly_window(today, 31, 1).unwrap();
///
/// assert_eq!(result.window.start, NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
/// assert_eq!(result.window.end, NaiveDate::from_ymd_opt(2026, 5, 30).unwrap());
/// ```
pub fn monthly_window(
    date: NaiveDate,
    start_day: u32,
    step_number: u32,
) -> EngineResult<PeriodWindowResult> {
    let this_month_start = clamp_day_of_month(date.year(), date.month(), start_day)?;

    let (start, end) = if date >= this_month_start {
        let (year, month) = next_month(date.year(), date.month());
        let next_start = clamp_day_of_month(year, month, start_day)?;
        (this_month_start, sub_days(next_start, 1)?)
    } else {
        let (year, month) = previous_month(date.year(), date.month());
        let start = clamp_day_of_month(year, month, start_day)?;
        (start, sub_days(this_month_start, 1)?)
    };
    let window = PeriodWindow { start, end };

    let clamped = start.day() != start_day;
    let reasoning = if clamped {
        format!(
            "Start day {} clamped to {} (last day of month); period runs {} to {}",
            start_day, start, start, end
        )
    } else {
        format!(
            "Most recent day {} on or before {} is {}; period runs {} to {}",
            start_day, date, start, start, end
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_window".to_string(),
        rule_name: "Monthly Period Window".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "period_start_day_of_month": start_day,
        }),
        output: serde_json::json!({
            "period_start": start.to_string(),
            "period_end": end.to_string(),
            "start_day_clamped": clamped,
        }),
        reasoning,
    };

    Ok(PeriodWindowResult { window, audit_step })
}
