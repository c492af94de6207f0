//! Pay-cycle calendar logic for the Pay-Cycle Engine.
//!
//! This module contains the calendar arithmetic and the frequency-specific
//! window rules (weekly, biweekly, semimonthly, monthly), the schedule
//! builder that chains windows into upcoming pay periods, and the
//! assignment of payable activity to periods.

mod assignment;
mod date_math;
mod monthly;
mod schedule;
mod semimonthly;
mod weekly;
mod window;

pub use assignment::{assign_activities, assign_activity};
pub use date_math::{
    add_days, clamp_day_of_month, days_in_month, is_leap_year, last_day_of_month,
    most_recent_weekday, next_month, previous_month, sub_days,
};
pub use monthly::monthly_window;
pub use schedule::{
    DEFAULT_PERIOD_COUNT, MAX_PERIOD_COUNT, build_pay_schedule, calculate_pay_periods,
    period_after, period_containing,
};
pub use semimonthly::{FIRST_HALF_END_DAY, semimonthly_window};
pub use weekly::{
    BIWEEKLY_PERIOD_DAYS, WEEKLY_PERIOD_DAYS, biweekly_epoch, biweekly_window,
    resolve_biweekly_anchor, weekly_window,
};
pub use window::{PeriodWindow, PeriodWindowResult};
