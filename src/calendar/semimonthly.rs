//! SEMIMONTHLY period windows.
//!
//! Each month splits into the 1st through the 15th and the 16th through the
//! last calendar day (28, 29, 30 or 31).

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::AuditStep;

use super::date_math::{clamp_day_of_month, last_day_of_month};
use super::window::{PeriodWindow, PeriodWindowResult};

/// The last day of the first half of a month.
pub const FIRST_HALF_END_DAY: u32 = 15;

/// Finds the SEMIMONTHLY window containing `date`.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::semimonthly_window;
/// use chrono::NaiveDate;
///
/// // Leap-year February
/// let today = NaiveDate::from_ymd_opt(2028, 2, 20).unwrap();
/// let result = semimonthly_window(today, 1).unwrap();
///
/// assert_eq!(result.window.start, NaiveDate::from_ymd_opt(2028, 2, 16).unwrap());
/// assert_eq!(result.window.end, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// ```
pub fn semimonthly_window(date: NaiveDate, step_number: u32) -> EngineResult<PeriodWindowResult> {
    let first_half = date.day() <= FIRST_HALF_END_DAY;

    let (start, end) = if first_half {
        (
            clamp_day_of_month(date.year(), date.month(), 1)?,
            clamp_day_of_month(date.year(), date.month(), FIRST_HALF_END_DAY)?,
        )
    } else {
        (
            clamp_day_of_month(date.year(), date.month(), FIRST_HALF_END_DAY + 1)?,
            last_day_of_month(date)?,
        )
    };
    let window = PeriodWindow { start, end };

    let half = if first_half { "first" } else { "second" };
    let audit_step = AuditStep {
        step_number,
        rule_id: "semimonthly_window".to_string(),
        rule_name: "Semimonthly Period Window".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
        }),
        output: serde_json::json!({
            "period_start": start.to_string(),
            "period_end": end.to_string(),
            "half": half,
        }),
        reasoning: format!(
            "Day {} falls in the {} half of the month; period runs {} to {}",
            date.day(),
            half,
            start,
            end
        ),
    };

    Ok(PeriodWindowResult { window, audit_step })
}
