//! Job scheduling for the rental engine.
//!
//! This module contains the availability checker that detects
//! overlapping equipment and operator bookings.

mod conflicts;

pub use conflicts::find_conflicts;
