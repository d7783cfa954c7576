//! HTTP request handlers for the rental engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Booking, BookingWindow, Lead, Quotation, QuotationInputs};
use crate::pricing::{RentBreakdown, price_quotation};
use crate::scheduling::find_conflicts;
use crate::store::{
    BookingRepository, LeadRepository, NewBooking, NewLead, QuotationRepository,
};

use super::request::{CreateQuotationRequest, UpdateJobStatusRequest};
use super::response::{ApiError, ApiErrorResponse, AvailabilityResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quotations/price", post(price_handler))
        .route("/availability/check", post(availability_handler))
        .route("/leads", post(create_lead_handler).get(list_leads_handler))
        .route(
            "/leads/:id/quotations",
            post(create_quotation_handler).get(list_quotations_handler),
        )
        .route("/jobs", post(create_job_handler).get(list_jobs_handler))
        .route("/jobs/:id/status", post(update_job_status_handler))
        .with_state(state)
}

/// Unwraps a JSON body, converting rejections into API error responses.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde.
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Converts an engine result into an HTTP response.
fn respond<T: serde::Serialize>(
    result: EngineResult<T>,
    success_status: StatusCode,
    correlation_id: Uuid,
) -> Response {
    match result {
        Ok(body) => (success_status, Json(body)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Request failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for `POST /quotations/price`.
///
/// Prices a quotation from raw inputs and returns the total with its
/// itemized breakdown. Pure computation; nothing is stored.
async fn price_handler(payload: Result<Json<QuotationInputs>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Pricing quotation");

    let inputs = match parse_json(payload, correlation_id) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let result: EngineResult<RentBreakdown> = price_quotation(&inputs);
    if let Ok(breakdown) = &result {
        info!(
            correlation_id = %correlation_id,
            total_rent = %breakdown.total_rent,
            "Quotation priced"
        );
    }
    respond(result, StatusCode::OK, correlation_id)
}

/// Handler for `POST /availability/check`.
///
/// Checks a candidate window against the stored booking list and
/// returns the conflicts, or an availability confirmation.
async fn availability_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookingWindow>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let window = match parse_json(payload, correlation_id) {
        Ok(window) => window,
        Err(response) => return response,
    };

    let result = check_availability(&state, &window);
    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            equipment_id = %window.equipment_id,
            operator_id = %window.operator_id,
            available = response.available,
            conflicts = response.conflicts.len(),
            "Availability checked"
        );
    }
    respond(result, StatusCode::OK, correlation_id)
}

fn check_availability(
    state: &AppState,
    window: &BookingWindow,
) -> EngineResult<AvailabilityResponse> {
    // Unknown resource ids are caller mistakes, not "fully available".
    state.catalog().get_equipment(&window.equipment_id)?;
    state.catalog().get_operator(&window.operator_id)?;

    let jobs = state.store().list_jobs()?;
    let conflicts = find_conflicts(window, &jobs);
    Ok(AvailabilityResponse {
        available: conflicts.is_empty(),
        conflicts,
    })
}

/// Handler for `POST /leads`.
async fn create_lead_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewLead>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let new_lead = match parse_json(payload, correlation_id) {
        Ok(new_lead) => new_lead,
        Err(response) => return response,
    };

    let result: EngineResult<Lead> = state.store().create_lead(new_lead);
    if let Ok(lead) = &result {
        info!(correlation_id = %correlation_id, lead_id = %lead.id, "Lead captured");
    }
    respond(result, StatusCode::CREATED, correlation_id)
}

/// Handler for `GET /leads`.
async fn list_leads_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(state.store().list_leads(), StatusCode::OK, correlation_id)
}

/// Handler for `POST /leads/{id}/quotations`.
///
/// Prices and stores the next quotation version for a lead.
async fn create_quotation_handler(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
    payload: Result<Json<CreateQuotationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result: EngineResult<Quotation> =
        state
            .store()
            .create_quotation(&lead_id, request.inputs, &request.created_by);
    if let Ok(quotation) = &result {
        info!(
            correlation_id = %correlation_id,
            lead_id = %lead_id,
            quotation_id = %quotation.id,
            version = quotation.version,
            total_rent = %quotation.total_rent,
            "Quotation issued"
        );
    }
    respond(result, StatusCode::CREATED, correlation_id)
}

/// Handler for `GET /leads/{id}/quotations`.
async fn list_quotations_handler(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    // 404 for an unknown lead rather than an empty history.
    let result = state
        .store()
        .get_lead(&lead_id)
        .and_then(|_| state.store().list_quotations_for_lead(&lead_id));
    respond(result, StatusCode::OK, correlation_id)
}

/// Handler for `POST /jobs`.
///
/// Schedules a job after validating catalog ids and resource
/// availability. A conflicting window is refused with HTTP 409.
async fn create_job_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewBooking>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let new_booking = match parse_json(payload, correlation_id) {
        Ok(new_booking) => new_booking,
        Err(response) => return response,
    };

    let result = schedule_job(&state, new_booking);
    if let Ok(job) = &result {
        info!(
            correlation_id = %correlation_id,
            job_id = %job.id,
            equipment_id = %job.equipment_id,
            operator_id = %job.operator_id,
            "Job scheduled"
        );
    }
    respond(result, StatusCode::CREATED, correlation_id)
}

fn schedule_job(state: &AppState, new_booking: NewBooking) -> EngineResult<Booking> {
    state.catalog().get_equipment(&new_booking.equipment_id)?;
    state.catalog().get_operator(&new_booking.operator_id)?;
    state.store().create_job(new_booking)
}

/// Handler for `GET /jobs`.
async fn list_jobs_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(state.store().list_jobs(), StatusCode::OK, correlation_id)
}

/// Handler for `POST /jobs/{id}/status`.
async fn update_job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    payload: Result<Json<UpdateJobStatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.store().update_job_status(&job_id, request.status);
    if let Ok(job) = &result {
        info!(
            correlation_id = %correlation_id,
            job_id = %job.id,
            status = ?job.status,
            "Job status updated"
        );
    }
    respond(result, StatusCode::OK, correlation_id)
}
