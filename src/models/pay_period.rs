//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type produced by the pay-cycle
//! calculator: one settlement window with its pay date and cutoff instant.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One settlement interval within a pay plan's cadence.
///
/// Both `period_start` and `period_end` are inclusive calendar dates.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::models::PayPeriod;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let period = PayPeriod {
///     period_start: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2026, 1, 23).unwrap(),
///     cutoff_at: NaiveDate::from_ymd_opt(2026, 1, 18)
///         .unwrap()
///         .and_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert_eq!(period.length_days(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub period_start: NaiveDate,
    /// The last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// The date payment for this period is issued.
    pub pay_date: NaiveDate,
    /// The last instant at which activity still counts toward this period.
    pub cutoff_at: NaiveDateTime,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_cycle_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     period_start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    ///     period_end: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
    ///     pay_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
    ///     cutoff_at: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap().and_hms_opt(23, 59, 0).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 16).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.period_start && date <= self.period_end
    }

    /// Number of calendar days in the period, counting both ends.
    pub fn length_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days() + 1
    }

    /// The cutoff instant of the preceding period.
    ///
    /// Activity strictly after this instant and up to [`PayPeriod::cutoff_at`]
    /// settles in this period.
    pub fn opens_after(&self) -> NaiveDateTime {
        self.period_start
            .checked_sub_days(Days::new(1))
            .unwrap_or(NaiveDate::MIN)
            .and_time(self.cutoff_at.time())
    }

    /// Checks whether activity at `timestamp` settles in this period.
    pub fn accepts(&self, timestamp: NaiveDateTime) -> bool {
        timestamp > self.opens_after() && timestamp <= self.cutoff_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn create_weekly_period() -> PayPeriod {
        PayPeriod {
            period_start: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
            pay_date: NaiveDate::from_ymd_opt(2026, 1, 23).unwrap(),
            cutoff_at: datetime("2026-01-18 17:00:00"),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = create_weekly_period();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = create_weekly_period();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()));
    }

    #[test]
    fn test_length_days_counts_both_ends() {
        assert_eq!(create_weekly_period().length_days(), 7);
    }

    #[test]
    fn test_opens_after_previous_cutoff() {
        let period = create_weekly_period();
        assert_eq!(period.opens_after(), datetime("2026-01-11 17:00:00"));
    }

    #[test]
    fn test_accepts_activity_at_cutoff() {
        let period = create_weekly_period();
        assert!(period.accepts(datetime("2026-01-18 17:00:00")));
    }

    #[test]
    fn test_rejects_activity_after_cutoff() {
        let period = create_weekly_period();
        assert!(!period.accepts(datetime("2026-01-18 17:01:00")));
    }

    #[test]
    fn test_accepts_activity_after_previous_cutoff() {
        // Sunday evening after the previous period closed
        let period = create_weekly_period();
        assert!(period.accepts(datetime("2026-01-11 18:30:00")));
        assert!(!period.accepts(datetime("2026-01-11 16:59:00")));
    }

    #[test]
    fn test_serialize_pay_period() {
        let json = serde_json::to_string(&create_weekly_period()).unwrap();
        assert!(json.contains("\"period_start\":\"2026-01-12\""));
        assert!(json.contains("\"period_end\":\"2026-01-18\""));
        assert!(json.contains("\"pay_date\":\"2026-01-23\""));
        assert!(json.contains("\"cutoff_at\":\"2026-01-18T17:00:00\""));
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{
            "period_start": "2026-02-16",
            "period_end": "2026-02-28",
            "pay_date": "2026-03-03",
            "cutoff_at": "2026-02-28T23:59:00"
        }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(
            period.period_end,
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
        assert_eq!(period.length_days(), 13);
    }
}
