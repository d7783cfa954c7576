//! Response types for the rental engine API.
//!
//! This module defines the success and error response structures and
//! the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::Booking;

/// Response body for the availability check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Whether both requested resources are free for the full window.
    pub available: bool,
    /// The bookings that hold the resources in the window, in input order.
    pub conflicts: Vec<Booking>,
}

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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
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
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "Quotation inputs must be non-negative numbers",
                ),
            },
            EngineError::InvalidWindow { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_WINDOW",
                    format!("Invalid booking window: {}", message),
                ),
            },
            EngineError::EquipmentNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EQUIPMENT_NOT_FOUND",
                    format!("Equipment not found: {}", id),
                    format!("The equipment id '{}' is not in the fleet catalog", id),
                ),
            },
            EngineError::OperatorNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "OPERATOR_NOT_FOUND",
                    format!("Operator not found: {}", id),
                    format!("The operator id '{}' is not on the roster", id),
                ),
            },
            EngineError::LeadNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("LEAD_NOT_FOUND", format!("Lead not found: {}", id)),
            },
            EngineError::QuotationNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "QUOTATION_NOT_FOUND",
                    format!("Quotation not found: {}", id),
                ),
            },
            EngineError::JobNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("JOB_NOT_FOUND", format!("Job not found: {}", id)),
            },
            EngineError::ScheduleConflict {
                conflicting_job_ids,
            } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "SCHEDULE_CONFLICT",
                    format!(
                        "Booking conflicts with {} existing job(s)",
                        conflicting_job_ids.len()
                    ),
                    conflicting_job_ids.join(", "),
                ),
            },
            EngineError::Forbidden { required } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new(
                    "FORBIDDEN",
                    format!("Role '{}' required for this operation", required),
                ),
            },
            EngineError::NotAuthenticated => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::new("NOT_AUTHENTICATED", "Not authenticated"),
            },
        }
    }
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
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let engine_error = EngineError::InvalidInput {
            field: "base_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_schedule_conflict_maps_to_409_with_ids() {
        let engine_error = EngineError::ScheduleConflict {
            conflicting_job_ids: vec!["job_1".to_string(), "job_2".to_string()],
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "SCHEDULE_CONFLICT");
        assert_eq!(api_error.error.details.as_deref(), Some("job_1, job_2"));
    }

    #[test]
    fn test_lead_not_found_maps_to_404() {
        let engine_error = EngineError::LeadNotFound {
            id: "missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "LEAD_NOT_FOUND");
    }
}
