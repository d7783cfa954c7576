//! Total rent calculation.
//!
//! This module implements the canonical multi-factor cost formula for a
//! rental quotation. Usage and elongation act as multiplicative factors
//! on basic rent. An earlier on-screen preview variant treated elongation
//! as an additive overlay on base cost; that variant diverges for any
//! non-zero usage or elongation percentage and is not implemented here.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::QuotationInputs;

use super::validate::validate_inputs;

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// The itemized intermediate values behind a quotation total.
///
/// Field order mirrors the calculation order, so a quotation form can
/// display the line items exactly as they were computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentBreakdown {
    /// Base rate times working hours per day.
    pub daily_rate: Decimal,
    /// Daily rate times rental days.
    pub basic_rent: Decimal,
    /// Food and accommodation across all crew members and days.
    pub resource_costs: Decimal,
    /// Multiplier applied for equipment usage (1 + usage_percent/100).
    pub usage_factor: Decimal,
    /// Multiplier applied for elongation (1 + elongation_percent/100).
    pub elongation_factor: Decimal,
    /// Risk surcharge, as a fraction of basic rent.
    pub risk_charge: Decimal,
    /// Flat commercial charge carried through from the inputs.
    pub commercial_charge: Decimal,
    /// Incidental plus other flat charges.
    pub additional_charges: Decimal,
    /// The final total, rounded to a whole currency amount.
    pub total_rent: Decimal,
}

/// Prices a quotation, returning the total and its itemized breakdown.
///
/// The formula, in fixed order:
///
/// 1. `daily_rate = base_rate * working_hours`
/// 2. `basic_rent = daily_rate * rental_days`
/// 3. `resource_costs = (food_charge + accom_charge) * num_resources * rental_days`
/// 4. `usage_factor = 1 + usage_percent / 100`
/// 5. `elongation_factor = 1 + elongation_percent / 100`
/// 6. `risk_charge = basic_rent * risk_percent / 100`
/// 7. `additional_charges = incidental_charge + other_charge`
/// 8. `total_rent = round(basic_rent * usage_factor * elongation_factor
///    + resource_costs + commercial_charge + risk_charge + additional_charges)`
///
/// The total is rounded to the nearest whole currency unit, half away
/// from zero. The function is pure and deterministic; inputs are
/// validated first and any negative field is rejected with
/// [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput).
///
/// # Example
///
/// ```
/// use rental_engine::models::QuotationInputs;
/// use rental_engine::pricing::price_quotation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = QuotationInputs {
///     base_rate: Decimal::from_str("5000").unwrap(),
///     working_hours: Decimal::from_str("8").unwrap(),
///     rental_days: Decimal::from_str("30").unwrap(),
///     ..Default::default()
/// };
/// let breakdown = price_quotation(&inputs).unwrap();
/// assert_eq!(breakdown.total_rent, Decimal::from_str("1200000").unwrap());
/// ```
pub fn price_quotation(inputs: &QuotationInputs) -> EngineResult<RentBreakdown> {
    validate_inputs(inputs)?;

    let daily_rate = inputs.base_rate * inputs.working_hours;
    let basic_rent = daily_rate * inputs.rental_days;
    let resource_costs =
        (inputs.food_charge + inputs.accom_charge) * inputs.num_resources * inputs.rental_days;
    let usage_factor = Decimal::ONE + inputs.usage_percent / HUNDRED;
    let elongation_factor = Decimal::ONE + inputs.elongation_percent / HUNDRED;
    let risk_charge = basic_rent * inputs.risk_percent / HUNDRED;
    let additional_charges = inputs.incidental_charge + inputs.other_charge;

    let total = basic_rent * usage_factor * elongation_factor
        + resource_costs
        + inputs.commercial_charge
        + risk_charge
        + additional_charges;

    Ok(RentBreakdown {
        daily_rate,
        basic_rent,
        resource_costs,
        usage_factor,
        elongation_factor,
        risk_charge,
        commercial_charge: inputs.commercial_charge,
        additional_charges,
        total_rent: total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    })
}

/// Calculates the total rent for a quotation.
///
/// Convenience wrapper over [`price_quotation`] for callers that only
/// need the final figure.
pub fn calculate_total_rent(inputs: &QuotationInputs) -> EngineResult<Decimal> {
    Ok(price_quotation(inputs)?.total_rent)
}
