//! Core data models for the rental engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod lead;
mod quotation;
mod user;

pub use booking::{Booking, BookingStatus, BookingWindow};
pub use lead::{Lead, LeadStatus};
pub use quotation::{Quotation, QuotationInputs};
pub use user::{User, UserRole};
