//! Core data models for the Pay-Cycle Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod activity;
mod pay_period;
mod pay_plan;
mod schedule_result;

pub use activity::{ActivityAssignment, AssignmentStatus, PayableActivity};
pub use pay_period::PayPeriod;
pub use pay_plan::{DEFAULT_CUTOFF_TIME, DayOfWeek, PayFrequency, PayPlan, PayableTrigger};
pub use schedule_result::{AuditStep, AuditTrace, AuditWarning, PayScheduleResult};
