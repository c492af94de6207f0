//! HTTP API module for the Pay-Cycle Engine.
//!
//! This module provides the REST endpoints for previewing pay plans,
//! listing registered plans, computing upcoming pay periods, and assigning
//! payable activity to periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_ASSIGNMENT_BATCH, create_router};
pub use request::{
    ActivityRequest, AssignmentRequest, PayPlanRequest, PreviewRequest, ScheduleQuery,
};
pub use response::{ApiError, ApiErrorResponse, AssignmentResponse, PlanSummary};
pub use state::AppState;
