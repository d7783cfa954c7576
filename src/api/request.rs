//! Request types for the rental engine API.
//!
//! This module defines the JSON request structures for the pricing,
//! availability, and scheduling endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{BookingStatus, QuotationInputs};

/// Request body for `POST /leads/{id}/quotations`.
///
/// The pricing inputs are flattened to top-level keys alongside the
/// author, matching the quotation record's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuotationRequest {
    /// The pricing inputs for this negotiation round.
    #[serde(flatten)]
    pub inputs: QuotationInputs,
    /// Id of the user issuing the quotation.
    pub created_by: String,
}

/// Request body for `POST /jobs/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusRequest {
    /// The status to move the job to.
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_create_quotation_request() {
        let json = r#"{
            "base_rate": "5000",
            "working_hours": "8",
            "rental_days": "30",
            "usage_percent": "80",
            "created_by": "user_001"
        }"#;

        let request: CreateQuotationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.inputs.base_rate,
            Decimal::from_str("5000").unwrap()
        );
        // Omitted fields default to zero.
        assert_eq!(request.inputs.food_charge, Decimal::ZERO);
        assert_eq!(request.created_by, "user_001");
    }

    #[test]
    fn test_deserialize_update_job_status_request() {
        let request: UpdateJobStatusRequest =
            serde_json::from_str(r#"{"status": "in_progress"}"#).unwrap();
        assert_eq!(request.status, BookingStatus::InProgress);
    }
}
