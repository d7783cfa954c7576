//! Booking conflict detection.
//!
//! A candidate window conflicts with an existing booking when they share
//! equipment or an operator, the existing booking still holds its
//! resources, and their half-open intervals overlap.

use crate::models::{Booking, BookingWindow};

/// Finds the existing bookings that conflict with a candidate window.
///
/// A booking `b` conflicts with the candidate iff:
/// - `b` uses the candidate's equipment **or** the candidate's operator, and
/// - `b`'s status still holds its resources (not completed/cancelled), and
/// - the half-open intervals `[start, end)` overlap:
///   `candidate.start < b.end && candidate.end > b.start`.
///
/// The returned bookings preserve their order in `existing`. An empty
/// result means both the equipment and the operator are free for the
/// full requested window. An empty candidate window (`start >= end`)
/// covers no time and never conflicts.
///
/// This is a linear scan; at fleet scale that is plenty, and the
/// contract leaves room for an interval index behind the same signature.
///
/// # Example
///
/// ```
/// use rental_engine::models::BookingWindow;
/// use rental_engine::scheduling::find_conflicts;
///
/// let candidate = BookingWindow {
///     equipment_id: "eq_tc_50".to_string(),
///     operator_id: "op_mike".to_string(),
///     start_date: "2023-11-01T10:00:00Z".parse().unwrap(),
///     end_date: "2023-11-01T12:00:00Z".parse().unwrap(),
/// };
/// assert!(find_conflicts(&candidate, &[]).is_empty());
/// ```
pub fn find_conflicts(candidate: &BookingWindow, existing: &[Booking]) -> Vec<Booking> {
    // A zero-length window covers no time; the raw overlap test below
    // would still match a point strictly inside an existing interval.
    if candidate.is_empty() {
        return Vec::new();
    }

    existing
        .iter()
        .filter(|b| shares_resource(candidate, b))
        .filter(|b| b.status.holds_resources())
        .filter(|b| overlaps(candidate, b))
        .cloned()
        .collect()
}

/// Whether the booking uses the candidate's equipment or operator.
fn shares_resource(candidate: &BookingWindow, booking: &Booking) -> bool {
    booking.equipment_id == candidate.equipment_id || booking.operator_id == candidate.operator_id
}

/// Standard half-open interval overlap test.
fn overlaps(candidate: &BookingWindow, booking: &Booking) -> bool {
    candidate.start_date < booking.end_date && candidate.end_date > booking.start_date
}
