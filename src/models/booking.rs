//! Booking model and related types.
//!
//! A booking (job) assigns one equipment unit and one operator to a
//! customer over a time interval. Intervals are half-open: a booking
//! holds its resources from `start` inclusive to `end` exclusive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Scheduled but not yet confirmed by the operator.
    Scheduled,
    /// Accepted by the assigned operator.
    Accepted,
    /// Rejected by the assigned operator; still holds the slot until
    /// rescheduled or cancelled.
    Rejected,
    /// Work is underway on site.
    InProgress,
    /// Work finished; the resources are released.
    Completed,
    /// Booking called off; the resources are released.
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking still holds its equipment and operator.
    ///
    /// Completed and cancelled bookings are resolved and no longer
    /// participate in conflict checks.
    pub fn holds_resources(&self) -> bool {
        !matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

/// A scheduled assignment of equipment and an operator to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: String,
    /// The lead this booking was created for.
    pub lead_id: String,
    /// Customer name, denormalized from the lead for display.
    pub customer_name: String,
    /// The equipment unit assigned to the job.
    pub equipment_id: String,
    /// The operator assigned to the job.
    pub operator_id: String,
    /// Start of the rental window (inclusive).
    pub start_date: DateTime<Utc>,
    /// End of the rental window (exclusive).
    pub end_date: DateTime<Utc>,
    /// Site location for the job.
    pub location: String,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A proposed booking window to check against existing bookings.
///
/// This is the candidate side of the availability check: the resources
/// the caller wants to reserve and the interval they want them for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingWindow {
    /// The equipment unit to reserve.
    pub equipment_id: String,
    /// The operator to reserve.
    pub operator_id: String,
    /// Start of the requested window (inclusive).
    pub start_date: DateTime<Utc>,
    /// End of the requested window (exclusive).
    pub end_date: DateTime<Utc>,
}

impl BookingWindow {
    /// Whether the requested window covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.start_date >= self.end_date
    }
}
