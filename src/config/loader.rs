//! Fleet catalog loading.
//!
//! This module provides the [`CatalogLoader`] type for loading the fleet
//! catalog from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EquipmentConfig, EquipmentUnit, FleetCatalog, FleetMetadata, OperatorRecord, OperatorsConfig,
};

/// Loads and provides access to the fleet catalog.
///
/// The `CatalogLoader` reads YAML files from a directory and provides
/// methods to query equipment units and the operator roster.
///
/// # Directory Structure
///
/// ```text
/// config/fleet/
/// ├── fleet.yaml      # Catalog metadata
/// ├── equipment.yaml  # Equipment units and base rates
/// └── operators.yaml  # Operator roster
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/fleet").unwrap();
/// let unit = loader.get_equipment("eq_tc_50").unwrap();
/// println!("Unit: {}", unit.name);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: FleetCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog directory (e.g., "./config/fleet")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<FleetMetadata>(&path.join("fleet.yaml"))?;
        let equipment = Self::load_yaml::<EquipmentConfig>(&path.join("equipment.yaml"))?;
        let operators = Self::load_yaml::<OperatorsConfig>(&path.join("operators.yaml"))?;

        let catalog = FleetCatalog::new(metadata, equipment.equipment, operators.operators);

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &FleetCatalog {
        &self.catalog
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &FleetMetadata {
        self.catalog.metadata()
    }

    /// Gets an equipment unit by its id.
    pub fn get_equipment(&self, id: &str) -> EngineResult<&EquipmentUnit> {
        self.catalog
            .equipment()
            .get(id)
            .ok_or_else(|| EngineError::EquipmentNotFound { id: id.to_string() })
    }

    /// Gets an operator by their id.
    pub fn get_operator(&self, id: &str) -> EngineResult<&OperatorRecord> {
        self.catalog
            .operators()
            .get(id)
            .ok_or_else(|| EngineError::OperatorNotFound { id: id.to_string() })
    }

    /// Gets the default hourly base rate for an equipment unit.
    ///
    /// Quotation forms pre-fill `base_rate` from this value; the figure
    /// on the quotation itself remains editable per negotiation.
    pub fn base_rate_for(&self, equipment_id: &str) -> EngineResult<Decimal> {
        Ok(self.get_equipment(equipment_id)?.base_rate)
    }
}
