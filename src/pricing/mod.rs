//! Quotation pricing for the rental engine.
//!
//! This module contains the pure pricing calculator: input validation
//! and the canonical total-rent formula with its itemized breakdown.

mod total_rent;
mod validate;

pub use total_rent::{RentBreakdown, calculate_total_rent, price_quotation};
pub use validate::validate_inputs;
