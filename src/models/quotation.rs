//! Quotation model and pricing input types.
//!
//! This module defines the QuotationInputs struct holding the raw pricing
//! factors for a rental quotation, and the Quotation record that pairs
//! those inputs with a derived total and version metadata.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw pricing factors supplied for a rental quotation.
///
/// All fields are non-negative. Percentages are interpreted as fractions
/// of a base amount (e.g. `usage_percent = 80` means a 1.8x factor on
/// basic rent). Every field defaults to zero, which prices to a zero total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuotationInputs {
    /// Hourly rate for the equipment, in currency per hour.
    #[serde(default)]
    pub base_rate: Decimal,
    /// Working hours per rental day.
    #[serde(default)]
    pub working_hours: Decimal,
    /// Number of rental days.
    #[serde(default)]
    pub rental_days: Decimal,
    /// Food charge per person per day.
    #[serde(default)]
    pub food_charge: Decimal,
    /// Accommodation charge per person per day.
    #[serde(default)]
    pub accom_charge: Decimal,
    /// Number of crew members on site.
    #[serde(default)]
    pub num_resources: Decimal,
    /// Usage surcharge as a percentage of basic rent.
    #[serde(default)]
    pub usage_percent: Decimal,
    /// Elongation surcharge as a percentage of basic rent.
    #[serde(default)]
    pub elongation_percent: Decimal,
    /// Flat commercial charge.
    #[serde(default)]
    pub commercial_charge: Decimal,
    /// Risk surcharge as a percentage of basic rent.
    #[serde(default)]
    pub risk_percent: Decimal,
    /// Flat incidental charge.
    #[serde(default)]
    pub incidental_charge: Decimal,
    /// Other flat charge.
    #[serde(default)]
    pub other_charge: Decimal,
}

impl QuotationInputs {
    /// Returns the field name of the first negative field, if any.
    ///
    /// Used by the pricing validator to reject malformed input with a
    /// typed error naming the offending field.
    pub fn first_negative_field(&self) -> Option<&'static str> {
        let fields: [(&'static str, Decimal); 12] = [
            ("base_rate", self.base_rate),
            ("working_hours", self.working_hours),
            ("rental_days", self.rental_days),
            ("food_charge", self.food_charge),
            ("accom_charge", self.accom_charge),
            ("num_resources", self.num_resources),
            ("usage_percent", self.usage_percent),
            ("elongation_percent", self.elongation_percent),
            ("commercial_charge", self.commercial_charge),
            ("risk_percent", self.risk_percent),
            ("incidental_charge", self.incidental_charge),
            ("other_charge", self.other_charge),
        ];
        fields
            .into_iter()
            .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
            .map(|(name, _)| name)
    }
}

/// A priced proposal for a lead, versioned per negotiation round.
///
/// `total_rent` is always derived from the inputs via the canonical
/// pricing formula and never hand-edited. Each revision of a lead's
/// pricing produces a new record with the next version number; existing
/// records are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Unique identifier for the quotation.
    pub id: String,
    /// The lead this quotation prices.
    pub lead_id: String,
    /// The pricing inputs this quotation was computed from.
    #[serde(flatten)]
    pub inputs: QuotationInputs,
    /// The derived total, rounded to a whole currency amount.
    pub total_rent: Decimal,
    /// Version number, monotonic per lead, starting at 1.
    pub version: u32,
    /// When the quotation was created.
    pub created_at: DateTime<Utc>,
    /// When the quotation record was last written.
    pub updated_at: DateTime<Utc>,
    /// Id of the user who created the quotation.
    pub created_by: String,
}
