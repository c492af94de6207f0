//! Activity-to-period assignment.
//!
//! Places payable activity into the pay period it settles in, using the
//! plan's payable trigger and cutoff time.

use crate::error::EngineResult;
use crate::models::{ActivityAssignment, AssignmentStatus, PayPlan, PayableActivity};

use super::schedule::{period_after, period_containing};

/// Assigns a single activity to a pay period.
///
/// The activity's trigger timestamp (per `plan.payable_trigger`) picks the
/// period whose window contains its date. Activity after the cutoff time on a
/// period's last day rolls into the following period. Activity without a
/// recorded trigger timestamp is returned as [`AssignmentStatus::Pending`].
///
/// # Example
///
/// ```
/// use pay_cycle_engine::calendar::assign_activity;
/// use pay_cycle_engine::models::{AssignmentStatus, DayOfWeek, PayFrequency, PayPlan, PayableActivity};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let plan = PayPlan::new(PayFrequency::Weekly)
///     .with_start_day_of_week(DayOfWeek::Monday)
///     .with_cutoff_time("17:00");
///
/// // Sunday 2026-01-18 after the 17:00 cutoff
/// let activity = PayableActivity {
///     id: "load_1042".to_string(),
///     delivered_at: Some(
///         NaiveDateTime::parse_from_str("2026-01-18 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     ),
///     completed_at: None,
///     approved_at: None,
/// };
///
/// let assignment = assign_activity(&plan, &activity).unwrap();
/// assert_eq!(assignment.status, AssignmentStatus::Assigned);
/// assert_eq!(
///     assignment.period.unwrap().period_start,
///     NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()
/// );
/// ```
pub fn assign_activity(
    plan: &PayPlan,
    activity: &PayableActivity,
) -> EngineResult<ActivityAssignment> {
    let Some(payable_at) = activity.payable_at(plan.payable_trigger) else {
        plan.validate()?;
        return Ok(ActivityAssignment {
            activity_id: activity.id.clone(),
            status: AssignmentStatus::Pending,
            payable_at: None,
            period: None,
        });
    };

    let containing = period_containing(plan, payable_at.date())?;
    let period = if containing.accepts(payable_at) {
        containing
    } else {
        period_after(plan, &containing)?
    };

    Ok(ActivityAssignment {
        activity_id: activity.id.clone(),
        status: AssignmentStatus::Assigned,
        payable_at: Some(payable_at),
        period: Some(period),
    })
}

/// Assigns a batch of activities, preserving input order.
///
/// Fails on the first configuration error; a plan that cannot place one
/// activity cannot place any.
pub fn assign_activities(
    plan: &PayPlan,
    activities: &[PayableActivity],
) -> EngineResult<Vec<ActivityAssignment>> {
    plan.validate()?;
    activities
        .iter()
        .map(|activity| assign_activity(plan, activity))
        .collect()
}
