//! Persistence seams for the rental engine.
//!
//! The engine core never owns storage. These traits are the narrow
//! interfaces a persistence collaborator implements (get / list /
//! create / update per record kind); [`InMemoryStore`] is the bundled
//! implementation used by the API layer and tests.

mod memory;

pub use memory::InMemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Booking, BookingStatus, Lead, LeadStatus, Quotation, QuotationInputs};

/// Fields supplied when capturing a new lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLead {
    /// The customer's name.
    pub customer_name: String,
    /// The service the customer asked for.
    pub service_needed: String,
    /// Where the job would take place.
    pub site_location: String,
    /// Id of the sales agent handling the lead.
    pub assigned_to: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Fields supplied when scheduling a new job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    /// The lead the job is for.
    pub lead_id: String,
    /// The equipment unit to assign.
    pub equipment_id: String,
    /// The operator to assign.
    pub operator_id: String,
    /// Start of the rental window (inclusive).
    pub start_date: DateTime<Utc>,
    /// End of the rental window (exclusive).
    pub end_date: DateTime<Utc>,
    /// Site location for the job.
    pub location: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Read/write access to leads.
pub trait LeadRepository {
    /// Gets a lead by id, or `LeadNotFound`.
    fn get_lead(&self, id: &str) -> EngineResult<Lead>;

    /// Lists all leads.
    fn list_leads(&self) -> EngineResult<Vec<Lead>>;

    /// Captures a new lead with status `New`.
    fn create_lead(&self, new: NewLead) -> EngineResult<Lead>;

    /// Moves a lead to a new pipeline status.
    fn update_lead_status(&self, id: &str, status: LeadStatus) -> EngineResult<Lead>;
}

/// Read/write access to quotations.
///
/// Quotation history is append-only: a revision creates a new record
/// with the next version number for the lead; existing records are
/// never mutated.
pub trait QuotationRepository {
    /// Gets a quotation by id, or `QuotationNotFound`.
    fn get_quotation(&self, id: &str) -> EngineResult<Quotation>;

    /// Lists the quotations for a lead, oldest version first.
    fn list_quotations_for_lead(&self, lead_id: &str) -> EngineResult<Vec<Quotation>>;

    /// Prices and stores a new quotation for a lead.
    ///
    /// The version number is one past the lead's latest version
    /// (starting at 1) and `total_rent` is derived from the inputs via
    /// the canonical formula.
    fn create_quotation(
        &self,
        lead_id: &str,
        inputs: QuotationInputs,
        created_by: &str,
    ) -> EngineResult<Quotation>;
}

/// Read/write access to scheduled jobs.
pub trait BookingRepository {
    /// Gets a job by id, or `JobNotFound`.
    fn get_job(&self, id: &str) -> EngineResult<Booking>;

    /// Lists all jobs.
    fn list_jobs(&self) -> EngineResult<Vec<Booking>>;

    /// Schedules a new job after checking resource availability.
    ///
    /// Fails with `ScheduleConflict` when the window overlaps an
    /// unresolved booking holding the same equipment or operator.
    fn create_job(&self, new: NewBooking) -> EngineResult<Booking>;

    /// Moves a job to a new lifecycle status.
    fn update_job_status(&self, id: &str, status: BookingStatus) -> EngineResult<Booking>;
}
