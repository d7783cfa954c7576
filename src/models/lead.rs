//! Lead model and sales pipeline statuses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of a lead in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    /// Freshly captured inquiry.
    New,
    /// Pricing is being negotiated; quotations are versioned per round.
    Negotiation,
    /// The customer accepted a quotation.
    Won,
    /// The inquiry was lost.
    Lost,
}

/// A prospective customer inquiry tracked through the sales pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier for the lead.
    pub id: String,
    /// The customer's name.
    pub customer_name: String,
    /// The service the customer asked for.
    pub service_needed: String,
    /// Where the job would take place.
    pub site_location: String,
    /// Current pipeline status.
    pub status: LeadStatus,
    /// Id of the sales agent handling the lead.
    pub assigned_to: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the lead was captured.
    pub created_at: DateTime<Utc>,
    /// When the lead was last updated.
    pub updated_at: DateTime<Utc>,
}
