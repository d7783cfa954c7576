//! Input validation for the pricing calculator.
//!
//! The calculator assumes pre-validated, non-negative inputs; this module
//! is the fail-fast guard that rejects malformed input with a typed error
//! instead of letting a negative total escape.

use crate::error::{EngineError, EngineResult};
use crate::models::QuotationInputs;

/// Validates quotation inputs before pricing.
///
/// Every field must be non-negative. Zero is valid for all fields and
/// prices to a zero total. The first offending field (in declaration
/// order) is named in the returned error.
pub fn validate_inputs(inputs: &QuotationInputs) -> EngineResult<()> {
    if let Some(field) = inputs.first_negative_field() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}
