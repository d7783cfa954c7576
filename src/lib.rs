//! Quotation Pricing and Job Scheduling Engine for crane rental operations
//!
//! This crate provides the pricing calculator and availability checker
//! behind a crane-rental CRM: quotation totals with itemized breakdowns,
//! and booking conflict detection over equipment and operator schedules.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod scheduling;
pub mod session;
pub mod store;
