//! Configuration types for the fleet catalog.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the YAML catalog files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the fleet catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetMetadata {
    /// The company operating the fleet.
    pub company: String,
    /// The version or effective date of the catalog.
    pub version: String,
    /// Currency code all catalog rates are expressed in.
    pub currency: String,
}

/// An equipment unit available for rental.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentUnit {
    /// The human-readable name of the unit (e.g. "Tower Crane TC-50").
    pub name: String,
    /// The equipment category (e.g. "Tower Crane").
    #[serde(rename = "type")]
    pub kind: String,
    /// A description of the unit's capacity and reach.
    pub description: String,
    /// Default hourly base rate for quotations using this unit.
    pub base_rate: Decimal,
}

/// Equipment catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentConfig {
    /// Map of equipment id to unit details.
    pub equipment: HashMap<String, EquipmentUnit>,
}

/// A crane operator on the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorRecord {
    /// The operator's name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// The equipment category the operator specializes in.
    pub specialization: String,
}

/// Operator roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorsConfig {
    /// Map of operator id to roster details.
    pub operators: HashMap<String, OperatorRecord>,
}

/// The complete fleet catalog loaded from YAML files.
#[derive(Debug, Clone)]
pub struct FleetCatalog {
    metadata: FleetMetadata,
    equipment: HashMap<String, EquipmentUnit>,
    operators: HashMap<String, OperatorRecord>,
}

impl FleetCatalog {
    /// Creates a new FleetCatalog from its component parts.
    pub fn new(
        metadata: FleetMetadata,
        equipment: HashMap<String, EquipmentUnit>,
        operators: HashMap<String, OperatorRecord>,
    ) -> Self {
        Self {
            metadata,
            equipment,
            operators,
        }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &FleetMetadata {
        &self.metadata
    }

    /// Returns all equipment units.
    pub fn equipment(&self) -> &HashMap<String, EquipmentUnit> {
        &self.equipment
    }

    /// Returns the operator roster.
    pub fn operators(&self) -> &HashMap<String, OperatorRecord> {
        &self.operators
    }
}
