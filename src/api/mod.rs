//! HTTP API for the rental engine.
//!
//! This module provides the axum-based HTTP API, including
//! request/response types, handlers, and application state.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateQuotationRequest, UpdateJobStatusRequest};
pub use response::{ApiError, ApiErrorResponse, AvailabilityResponse};
pub use state::AppState;
