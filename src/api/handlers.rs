//! HTTP request handlers for the Pay-Cycle Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{assign_activities, build_pay_schedule};
use crate::models::{PayPlan, PayableActivity};

use super::request::{AssignmentRequest, PreviewRequest, ScheduleQuery};
use super::response::{ApiError, ApiErrorResponse, AssignmentResponse, PlanSummary};
use super::state::AppState;

/// Largest batch accepted by the assignment endpoint.
pub const MAX_ASSIGNMENT_BATCH: usize = 1000;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pay-periods/preview", post(preview_handler))
        .route("/plans", get(list_plans_handler))
        .route("/plans/:id/pay-periods", get(plan_schedule_handler))
        .route("/plans/:id/assignments", post(assignments_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to an API error.
fn json_rejection_response(rejection: JsonRejection, correlation_id: &Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

/// Builds a schedule and renders it, logging the outcome.
fn schedule_response(plan: &PayPlan, today: NaiveDate, count: u32, correlation_id: &Uuid) -> Response {
    match build_pay_schedule(plan, today, count) {
        Ok(schedule) => {
            info!(
                correlation_id = %correlation_id,
                plan_id = %plan.id,
                frequency = %plan.frequency,
                reference_date = %today,
                periods = schedule.periods.len(),
                duration_us = schedule.audit_trace.duration_us,
                "Pay schedule computed"
            );
            json_ok(schedule)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                plan_id = %plan.id,
                error = %err,
                "Pay schedule failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /pay-periods/preview`.
///
/// Computes periods for a plan that has not been saved yet.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay period preview");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, &correlation_id),
    };

    let count = request
        .count
        .unwrap_or_else(|| state.config().default_period_count());
    let plan: PayPlan = request.plan.into();

    schedule_response(&plan, request.today, count, &correlation_id)
}

/// Handler for `GET /plans`.
async fn list_plans_handler(State(state): State<AppState>) -> Response {
    let plans: Vec<PlanSummary> = state.config().plans().map(PlanSummary::from).collect();
    json_ok(plans)
}

/// Handler for `GET /plans/:id/pay-periods`.
async fn plan_schedule_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<ScheduleQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, plan_id = %id, "Processing plan schedule request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string error"
            );
            return ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
                .into_response();
        }
    };

    let config = state.config();
    let plan = match config.get_plan(&id) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(correlation_id = %correlation_id, plan_id = %id, "Plan not found");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    let count = query
        .count
        .unwrap_or_else(|| config.default_period_count());

    schedule_response(plan, today, count, &correlation_id)
}

/// Handler for `POST /plans/:id/assignments`.
///
/// Places each activity into the pay period it settles in.
async fn assignments_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, plan_id = %id, "Processing activity assignment");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, &correlation_id),
    };

    if request.activities.len() > MAX_ASSIGNMENT_BATCH {
        warn!(
            correlation_id = %correlation_id,
            activities = request.activities.len(),
            "Assignment batch too large"
        );
        return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
            "at most {} activities may be assigned per request",
            MAX_ASSIGNMENT_BATCH
        )))
        .into_response();
    }

    let plan = match state.config().get_plan(&id) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(correlation_id = %correlation_id, plan_id = %id, "Plan not found");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let activities: Vec<PayableActivity> =
        request.activities.into_iter().map(Into::into).collect();

    match assign_activities(plan, &activities) {
        Ok(assignments) => {
            info!(
                correlation_id = %correlation_id,
                plan_id = %id,
                activities = assignments.len(),
                "Activities assigned"
            );
            json_ok(AssignmentResponse {
                plan_id: id,
                assignments,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Activity assignment failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
