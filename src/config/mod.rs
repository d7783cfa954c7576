//! Fleet catalog configuration for the rental engine.
//!
//! This module provides functionality to load the fleet catalog from
//! YAML files, including catalog metadata, equipment units with their
//! default base rates, and the operator roster.

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{
    EquipmentConfig, EquipmentUnit, FleetCatalog, FleetMetadata, OperatorRecord, OperatorsConfig,
};
