//! Pay plan configuration models.
//!
//! A [`PayPlan`] describes how often settlement periods recur and on what
//! calendar rule. Exactly one of the start-day fields is meaningful for a
//! given [`PayFrequency`]; the other is ignored.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How often pay periods recur.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::models::PayFrequency;
///
/// let frequency: PayFrequency = serde_json::from_str("\"BIWEEKLY\"").unwrap();
/// assert_eq!(frequency, PayFrequency::Biweekly);
/// assert_eq!(frequency.to_string(), "BIWEEKLY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayFrequency {
    /// 7-day periods starting on a fixed weekday.
    Weekly,
    /// 14-day periods starting on a fixed weekday, aligned to an anchor date.
    Biweekly,
    /// Two periods per month: the 1st to the 15th, and the 16th to month end.
    Semimonthly,
    /// One period per month starting on a fixed day of the month.
    Monthly,
}

impl PayFrequency {
    /// Returns true when the frequency is anchored on a day of the week.
    pub fn uses_weekday(&self) -> bool {
        matches!(self, PayFrequency::Weekly | PayFrequency::Biweekly)
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayFrequency::Weekly => write!(f, "WEEKLY"),
            PayFrequency::Biweekly => write!(f, "BIWEEKLY"),
            PayFrequency::Semimonthly => write!(f, "SEMIMONTHLY"),
            PayFrequency::Monthly => write!(f, "MONTHLY"),
        }
    }
}

/// A day of the week as written in plan settings (`MONDAY` .. `SUNDAY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        };
        write!(f, "{}", name)
    }
}

/// Which activity timestamp makes a load payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayableTrigger {
    /// Payable once the load is delivered.
    #[default]
    DeliveryDate,
    /// Payable once the load is marked complete.
    CompletionDate,
    /// Payable once the load is approved for settlement.
    ApprovalDate,
}

/// The cutoff time used when a plan does not specify one.
pub const DEFAULT_CUTOFF_TIME: &str = "23:59";

fn default_cutoff_time() -> String {
    DEFAULT_CUTOFF_TIME.to_string()
}

/// An administrator-configured pay schedule.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::models::{DayOfWeek, PayFrequency, PayPlan};
///
/// let plan = PayPlan::new(PayFrequency::Weekly)
///     .with_start_day_of_week(DayOfWeek::Monday)
///     .with_payment_lag_days(5);
///
/// assert!(plan.validate().is_ok());
/// assert!(PayPlan::new(PayFrequency::Weekly).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPlan {
    /// Registry identifier. Empty for ad-hoc previews.
    #[serde(default)]
    pub id: String,
    /// Display name shown on the settings screen.
    #[serde(default)]
    pub name: String,
    /// How often periods recur.
    pub frequency: PayFrequency,
    /// First day of each period for WEEKLY and BIWEEKLY plans.
    #[serde(default)]
    pub period_start_day_of_week: Option<DayOfWeek>,
    /// First day of each period for MONTHLY plans (1-31, clamped per month).
    #[serde(default)]
    pub period_start_day_of_month: Option<u32>,
    /// Local time on the last day of a period after which activity rolls forward.
    #[serde(default = "default_cutoff_time")]
    pub cutoff_time: String,
    /// Days between the end of a period and its pay date.
    #[serde(default)]
    pub payment_lag_days: u32,
    /// Which activity timestamp decides the period an activity settles in.
    #[serde(default)]
    pub payable_trigger: PayableTrigger,
    /// Explicit alignment date for BIWEEKLY plans.
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,
}

impl PayPlan {
    /// Creates a plan with the given frequency and all other fields at their defaults.
    pub fn new(frequency: PayFrequency) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            frequency,
            period_start_day_of_week: None,
            period_start_day_of_month: None,
            cutoff_time: default_cutoff_time(),
            payment_lag_days: 0,
            payable_trigger: PayableTrigger::default(),
            anchor_date: None,
        }
    }

    /// Sets the start weekday.
    pub fn with_start_day_of_week(mut self, day: DayOfWeek) -> Self {
        self.period_start_day_of_week = Some(day);
        self
    }

    /// Sets the start day of month.
    pub fn with_start_day_of_month(mut self, day: u32) -> Self {
        self.period_start_day_of_month = Some(day);
        self
    }

    /// Sets the payment lag.
    pub fn with_payment_lag_days(mut self, days: u32) -> Self {
        self.payment_lag_days = days;
        self
    }

    /// Sets the cutoff time string.
    pub fn with_cutoff_time(mut self, cutoff: impl Into<String>) -> Self {
        self.cutoff_time = cutoff.into();
        self
    }

    /// Sets the BIWEEKLY anchor date.
    pub fn with_anchor_date(mut self, anchor: NaiveDate) -> Self {
        self.anchor_date = Some(anchor);
        self
    }

    /// Sets the payable trigger.
    pub fn with_payable_trigger(mut self, trigger: PayableTrigger) -> Self {
        self.payable_trigger = trigger;
        self
    }

    /// Checks that every field required by the plan's frequency is present and in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPlan`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        self.cutoff()?;

        match self.frequency {
            PayFrequency::Weekly => {
                self.start_weekday()?;
            }
            PayFrequency::Biweekly => {
                let weekday = self.start_weekday()?;
                if let Some(anchor) = self.anchor_date {
                    if anchor.weekday() != weekday {
                        return Err(EngineError::invalid_plan(
                            "anchor_date",
                            format!(
                                "{} is a {}, expected a {}",
                                anchor,
                                DayOfWeek::from(anchor.weekday()),
                                DayOfWeek::from(weekday)
                            ),
                        ));
                    }
                }
            }
            PayFrequency::Monthly => {
                self.start_day_of_month()?;
            }
            PayFrequency::Semimonthly => {}
        }

        Ok(())
    }

    /// Returns the start weekday for WEEKLY and BIWEEKLY plans.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPlan`] when the field is not set.
    pub fn start_weekday(&self) -> EngineResult<Weekday> {
        self.period_start_day_of_week
            .map(Weekday::from)
            .ok_or_else(|| {
                EngineError::invalid_plan(
                    "period_start_day_of_week",
                    format!("a start day of the week is required for {} plans", self.frequency),
                )
            })
    }

    /// Returns the start day of month for MONTHLY plans.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPlan`] when the field is not set or not in 1-31.
    pub fn start_day_of_month(&self) -> EngineResult<u32> {
        match self.period_start_day_of_month {
            Some(day) if (1..=31).contains(&day) => Ok(day),
            Some(day) => Err(EngineError::invalid_plan(
                "period_start_day_of_month",
                format!("{} is not between 1 and 31", day),
            )),
            None => Err(EngineError::invalid_plan(
                "period_start_day_of_month",
                format!("a start day of the month is required for {} plans", self.frequency),
            )),
        }
    }

    /// Parses the cutoff time (`HH:MM` or `HH:MM:SS`).
    ///
    /// # Example
    ///
    /// ```
    /// use pay_cycle_engine::models::{PayFrequency, PayPlan};
    /// use chrono::NaiveTime;
    ///
    /// let plan = PayPlan::new(PayFrequency::Semimonthly).with_cutoff_time("17:30");
    /// assert_eq!(plan.cutoff().unwrap(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
    /// ```
    pub fn cutoff(&self) -> EngineResult<NaiveTime> {
        let raw = self.cutoff_time.trim();
        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map_err(|_| {
                EngineError::invalid_plan(
                    "cutoff_time",
                    format!("'{}' is not a time of day (expected HH:MM)", self.cutoff_time),
                )
            })
    }
}
