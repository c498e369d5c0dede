//! Catalog configuration loading.
//!
//! This module provides the [`ConfigLoader`] type for loading a tool catalog
//! from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::catalog::ToolCatalog;
use crate::error::{RentalError, RentalResult};

use super::types::{CatalogConfig, CatalogMetadata};

/// Loads and provides access to a catalog file.
///
/// # File Structure
///
/// ```text
/// catalog:
///   name: Tool Rental Point of Sale
///   version: "2021-09"
/// tools:
///   - code: LADW
///     type: ladder
///     brand: werner
///     daily_charge: "1.99"
///     charge_weekends: true
///     charge_holidays: false
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tools.yaml")?;
/// let tool = loader.catalog().lookup("LADW")?;
/// println!("{}: ${}/day", tool, tool.daily_charge);
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: CatalogMetadata,
    catalog: ToolCatalog,
}

impl ConfigLoader {
    /// Loads a catalog from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`RentalError::ConfigNotFound`] if the file cannot be read
    /// - [`RentalError::ConfigParseError`] if the YAML is invalid, a code is
    ///   listed twice or a daily charge is negative
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&path_str, &content)
    }

    /// Parses a catalog from YAML text; `source` names it in errors.
    pub fn from_yaml(source: &str, content: &str) -> RentalResult<Self> {
        let config: CatalogConfig =
            serde_yaml::from_str(content).map_err(|e| RentalError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        for entry in &config.tools {
            if !seen.insert(entry.code) {
                return Err(RentalError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("duplicate tool code {}", entry.code),
                });
            }
            if entry.daily_charge < Decimal::ZERO {
                return Err(RentalError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("negative daily charge for {}", entry.code),
                });
            }
        }

        let catalog = ToolCatalog::new(config.tools.into_iter().map(Into::into));
        info!(
            source,
            catalog = %config.catalog.name,
            tools = catalog.len(),
            "Loaded tool catalog"
        );

        Ok(Self {
            metadata: config.catalog,
            catalog,
        })
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> ToolCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> String {
        format!("{}/config/tools.yaml", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_shipped_catalog_matches_standard() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.catalog(), &ToolCatalog::standard());
        assert_eq!(loader.metadata().name, "Tool Rental Point of Sale");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/tools.yaml");
        match result {
            Err(RentalError::ConfigNotFound { path }) => {
                assert!(path.contains("tools.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_catalog_only_stocks_listed_tools() {
        let yaml = r#"
catalog:
  name: Ladders Only
  version: "1"
tools:
  - code: LADW
    type: ladder
    brand: werner
    daily_charge: "2.49"
    charge_weekends: false
    charge_holidays: false
"#;
        let loader = ConfigLoader::from_yaml("inline", yaml).unwrap();
        let catalog = loader.into_catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.lookup("LADW").unwrap().daily_charge,
            Decimal::new(249, 2)
        );
        assert!(matches!(
            catalog.lookup("CHNS"),
            Err(RentalError::UnknownToolCode { .. })
        ));
    }

    #[test]
    fn test_unknown_code_in_file_is_parse_error() {
        let yaml = r#"
catalog:
  name: Bad
  version: "1"
tools:
  - code: SAWZ
    type: chainsaw
    brand: stihl
    daily_charge: "1.00"
    charge_weekends: false
    charge_holidays: false
"#;
        let result = ConfigLoader::from_yaml("inline", yaml);
        assert!(matches!(result, Err(RentalError::ConfigParseError { .. })));
    }

    #[test]
    fn test_duplicate_code_is_parse_error() {
        let yaml = r#"
catalog:
  name: Dupes
  version: "1"
tools:
  - code: JAKR
    type: jackhammer
    brand: ridgid
    daily_charge: "2.99"
    charge_weekends: false
    charge_holidays: false
  - code: JAKR
    type: jackhammer
    brand: ridgid
    daily_charge: "3.99"
    charge_weekends: false
    charge_holidays: false
"#;
        match ConfigLoader::from_yaml("inline", yaml) {
            Err(RentalError::ConfigParseError { message, .. }) => {
                assert!(message.contains("duplicate tool code JAKR"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_charge_is_parse_error() {
        let yaml = r#"
catalog:
  name: Refunds
  version: "1"
tools:
  - code: JAKD
    type: jackhammer
    brand: dewalt
    daily_charge: "-1.00"
    charge_weekends: false
    charge_holidays: false
"#;
        assert!(matches!(
            ConfigLoader::from_yaml("inline", yaml),
            Err(RentalError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = ConfigLoader::from_yaml("broken.yaml", "tools: [");
        match result {
            Err(RentalError::ConfigParseError { path, .. }) => assert_eq!(path, "broken.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
