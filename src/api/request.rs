//! Request types for the Pay-Cycle Engine API.
//!
//! This module defines the JSON request bodies and query strings accepted by
//! the schedule and assignment endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    DEFAULT_CUTOFF_TIME, DayOfWeek, PayFrequency, PayPlan, PayableActivity, PayableTrigger,
};

/// Request body for `POST /pay-periods/preview`.
///
/// Carries the plan exactly as it stands in the settings form, so the preview
/// can be refreshed on every edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The plan being edited.
    pub plan: PayPlanRequest,
    /// The reference date for the preview.
    pub today: NaiveDate,
    /// Number of periods to return.
    #[serde(default)]
    pub count: Option<u32>,
}

/// Pay plan settings in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPlanRequest {
    /// Plan id, if the plan has been saved.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// How often periods recur.
    pub frequency: PayFrequency,
    /// Start weekday for WEEKLY and BIWEEKLY plans.
    #[serde(default)]
    pub period_start_day_of_week: Option<DayOfWeek>,
    /// Start day for MONTHLY plans.
    #[serde(default)]
    pub period_start_day_of_month: Option<u32>,
    /// Local cutoff time (`HH:MM`).
    #[serde(default)]
    pub cutoff_time: Option<String>,
    /// Days between period end and pay date.
    #[serde(default)]
    pub payment_lag_days: u32,
    /// Which activity timestamp makes a load payable.
    #[serde(default)]
    pub payable_trigger: PayableTrigger,
    /// Explicit BIWEEKLY anchor.
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,
}

/// Query string for `GET /plans/:id/pay-periods`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// Reference date; defaults to the current UTC date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Number of periods to return.
    #[serde(default)]
    pub count: Option<u32>,
}

/// Request body for `POST /plans/:id/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Activities to place into pay periods.
    pub activities: Vec<ActivityRequest>,
}

/// A payable activity in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    /// Identifier of the load or trip.
    pub id: String,
    /// When the load was delivered.
    #[serde(default)]
    pub delivered_at: Option<NaiveDateTime>,
    /// When the load was marked complete.
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    /// When the load was approved for settlement.
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
}

impl From<PayPlanRequest> for PayPlan {
    fn from(req: PayPlanRequest) -> Self {
        PayPlan {
            id: req.id,
            name: req.name,
            frequency: req.frequency,
            period_start_day_of_week: req.period_start_day_of_week,
            period_start_day_of_month: req.period_start_day_of_month,
            cutoff_time: req
                .cutoff_time
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CUTOFF_TIME.to_string()),
            payment_lag_days: req.payment_lag_days,
            payable_trigger: req.payable_trigger,
            anchor_date: req.anchor_date,
        }
    }
}

impl From<ActivityRequest> for PayableActivity {
    fn from(req: ActivityRequest) -> Self {
        PayableActivity {
            id: req.id,
            delivered_at: req.delivered_at,
            completed_at: req.completed_at,
            approved_at: req.approved_at,
        }
    }
}
