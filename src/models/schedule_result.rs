//! Schedule result models for the Pay-Cycle Engine.
//!
//! This module contains the [`PayScheduleResult`] type and its audit
//! structures, capturing the computed periods together with a trace of how
//! each window was anchored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayFrequency, PayPeriod};

/// A single step in the audit trace recording a calendar decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while building a schedule.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a schedule.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calendar steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while building the schedule.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The upcoming pay periods for a plan, as returned to callers.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::models::{AuditTrace, PayFrequency, PayScheduleResult};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let result = PayScheduleResult {
///     schedule_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     plan_id: "weekly_drivers".to_string(),
///     frequency: PayFrequency::Weekly,
///     reference_date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     periods: vec![],
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.current_period().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayScheduleResult {
    /// Unique identifier for this schedule computation.
    pub schedule_id: Uuid,
    /// When the schedule was computed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that computed the schedule.
    pub engine_version: String,
    /// The plan the schedule was computed for (empty for previews).
    pub plan_id: String,
    /// The plan's frequency.
    pub frequency: PayFrequency,
    /// The "today" the schedule was computed relative to.
    pub reference_date: NaiveDate,
    /// Upcoming periods, the first containing `reference_date`.
    pub periods: Vec<PayPeriod>,
    /// Complete audit trace of calendar decisions.
    pub audit_trace: AuditTrace,
}

impl PayScheduleResult {
    /// Returns the period containing the reference date.
    pub fn current_period(&self) -> Option<&PayPeriod> {
        self.periods.first()
    }
}
