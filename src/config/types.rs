//! Configuration types for the tool catalog file.
//!
//! These are the strongly-typed structures deserialized from the YAML
//! catalog file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Brand, Tool, ToolCode, ToolType};

/// Metadata about the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// The store or catalog name.
    pub name: String,
    /// The version or effective date of the price list.
    pub version: String,
}

/// One tool as written in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEntry {
    /// The tool code (e.g., "LADW").
    pub code: ToolCode,
    /// The tool category.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// The manufacturer.
    pub brand: Brand,
    /// Charge per chargeable day.
    pub daily_charge: Decimal,
    /// Whether weekend days are billed.
    pub charge_weekends: bool,
    /// Whether observed holidays are billed.
    pub charge_holidays: bool,
}

impl From<ToolEntry> for Tool {
    fn from(entry: ToolEntry) -> Self {
        Tool {
            code: entry.code,
            tool_type: entry.tool_type,
            brand: entry.brand,
            daily_charge: entry.daily_charge,
            charge_weekends: entry.charge_weekends,
            charge_holidays: entry.charge_holidays,
        }
    }
}

/// The complete catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Catalog metadata.
    pub catalog: CatalogMetadata,
    /// The stocked tools.
    pub tools: Vec<ToolEntry>,
}
