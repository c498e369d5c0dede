//! Application state for the rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::ToolCatalog;

/// Longest rental the API accepts unless configured otherwise: ten years.
pub const DEFAULT_MAX_RENTAL_DAYS: u32 = 3650;

/// Shared application state.
///
/// Holds the read-only tool catalog shared by every request and the longest
/// rental a request may ask for.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<ToolCatalog>,
    max_rental_days: u32,
}

impl AppState {
    /// Creates a new application state serving the given catalog.
    pub fn new(catalog: ToolCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            max_rental_days: DEFAULT_MAX_RENTAL_DAYS,
        }
    }

    /// Sets the longest rental, in days, a checkout request may ask for.
    pub fn with_max_rental_days(mut self, max_rental_days: u32) -> Self {
        self.max_rental_days = max_rental_days;
        self
    }

    /// Returns the tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Returns the longest accepted rental in days.
    pub fn max_rental_days(&self) -> u32 {
        self.max_rental_days
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ToolCatalog::standard())
    }
}
