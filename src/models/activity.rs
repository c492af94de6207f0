//! Payable activity models.
//!
//! A [`PayableActivity`] is a dispatched load reduced to the timestamps that
//! can make it payable. An [`ActivityAssignment`] records which pay period
//! it settles in.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{PayPeriod, PayableTrigger};

/// A unit of work that becomes payable when a trigger timestamp is recorded.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::models::{PayableActivity, PayableTrigger};
/// use chrono::NaiveDateTime;
///
/// let delivered = NaiveDateTime::parse_from_str("2026-01-14 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let activity = PayableActivity {
///     id: "load_1042".to_string(),
///     delivered_at: Some(delivered),
///     completed_at: None,
///     approved_at: None,
/// };
///
/// assert_eq!(activity.payable_at(PayableTrigger::DeliveryDate), Some(delivered));
/// assert_eq!(activity.payable_at(PayableTrigger::ApprovalDate), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayableActivity {
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

impl PayableActivity {
    /// Returns the timestamp selected by `trigger`, if it has been recorded.
    pub fn payable_at(&self, trigger: PayableTrigger) -> Option<NaiveDateTime> {
        match trigger {
            PayableTrigger::DeliveryDate => self.delivered_at,
            PayableTrigger::CompletionDate => self.completed_at,
            PayableTrigger::ApprovalDate => self.approved_at,
        }
    }
}

/// Whether an activity could be placed in a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// The trigger timestamp is recorded and a period was found.
    Assigned,
    /// The trigger timestamp has not been recorded yet.
    Pending,
}

/// The pay period an activity settles in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAssignment {
    /// The activity identifier.
    pub activity_id: String,
    /// Whether the activity was placed.
    pub status: AssignmentStatus,
    /// The trigger timestamp used for placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payable_at: Option<NaiveDateTime>,
    /// The period the activity settles in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PayPeriod>,
}
