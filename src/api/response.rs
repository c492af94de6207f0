//! Response types for the Pay-Cycle Engine API.
//!
//! This module defines the response bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ActivityAssignment, DayOfWeek, PayFrequency, PayPlan, PayableTrigger};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a malformed query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPayPlan { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PAY_PLAN",
                    format!("Invalid pay plan field '{}': {}", field, message),
                    format!("Complete the '{}' setting and try again", field),
                ),
            },
            EngineError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid request parameter '{}': {}", field, message),
                    format!("Adjust '{}' in the request and try again", field),
                ),
            },
            EngineError::PlanNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PLAN_NOT_FOUND",
                    format!("Pay plan not found: {}", id),
                    format!("No pay plan with id '{}' is registered", id),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}

/// A registered plan as listed by `GET /plans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// How often periods recur.
    pub frequency: PayFrequency,
    /// Start weekday, for WEEKLY and BIWEEKLY plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start_day_of_week: Option<DayOfWeek>,
    /// Start day of month, for MONTHLY plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start_day_of_month: Option<u32>,
    /// Days between period end and pay date.
    pub payment_lag_days: u32,
    /// Which activity timestamp makes a load payable.
    pub payable_trigger: PayableTrigger,
}

impl From<&PayPlan> for PlanSummary {
    fn from(plan: &PayPlan) -> Self {
        // Only the start field the frequency uses is reported
        let (weekday, month_day) = if plan.frequency.uses_weekday() {
            (plan.period_start_day_of_week, None)
        } else if plan.frequency == PayFrequency::Monthly {
            (None, plan.period_start_day_of_month)
        } else {
            (None, None)
        };

        PlanSummary {
            id: plan.id.clone(),
            name: plan.name.clone(),
            frequency: plan.frequency,
            period_start_day_of_week: weekday,
            period_start_day_of_month: month_day,
            payment_lag_days: plan.payment_lag_days,
            payable_trigger: plan.payable_trigger,
        }
    }
}

/// Response body for `POST /plans/:id/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    /// The plan used for assignment.
    pub plan_id: String,
    /// One assignment per requested activity, in request order.
    pub assignments: Vec<ActivityAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_plan_maps_to_bad_request() {
        let api_error: ApiErrorResponse =
            EngineError::invalid_plan("period_start_day_of_week", "required").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PAY_PLAN");
        assert!(api_error.error.message.contains("period_start_day_of_week"));
    }

    #[test]
    fn test_invalid_request_maps_to_validation_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidRequest {
            field: "count".to_string(),
            message: "must be between 1 and 120, got 0".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("count"));
        assert!(!api_error.error.details.unwrap().contains("setting"));
    }

    #[test]
    fn test_plan_not_found_maps_to_not_found() {
        let api_error: ApiErrorResponse = EngineError::PlanNotFound {
            id: "missing".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "PLAN_NOT_FOUND");
    }

    #[test]
    fn test_calculation_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::CalculationError {
            message: "overflow".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_plan_summary_hides_unused_start_field() {
        let plan = PayPlan::new(PayFrequency::Weekly)
            .with_start_day_of_week(DayOfWeek::Tuesday)
            .with_start_day_of_month(12);
        let summary = PlanSummary::from(&plan);
        assert_eq!(summary.period_start_day_of_week, Some(DayOfWeek::Tuesday));
        assert!(summary.period_start_day_of_month.is_none());
    }
}
