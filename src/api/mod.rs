//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST API endpoints for computing rental
//! agreements and listing the catalog.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::{AppState, DEFAULT_MAX_RENTAL_DAYS};
