//! Period window types shared by the frequency-specific rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// An inclusive date range covered by one pay period, before pay date and
/// cutoff are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

/// The window containing a date, with the audit step explaining how it was found.
#[derive(Debug, Clone)]
pub struct PeriodWindowResult {
    /// The window containing the queried date.
    pub window: PeriodWindow,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}
