//! Catalog configuration loading.
//!
//! This module loads a tool catalog from a YAML file as an alternative to
//! the built-in [`crate::catalog::ToolCatalog::standard`] table.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/tools.yaml").unwrap();
//! println!("Loaded catalog: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CatalogConfig, CatalogMetadata, ToolEntry};
