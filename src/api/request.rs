//! Request types for the rental API.
//!
//! This module defines the JSON request structure for the `/checkout` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/checkout` endpoint.
///
/// Values arrive unvalidated; signed integers let the engine reject negative
/// input with the proper error instead of a JSON type error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The tool code (e.g., "LADW").
    pub tool_code: String,
    /// Number of rental days.
    pub rental_days: i64,
    /// Discount percentage, 0 to 100.
    pub discount_percentage: i64,
    /// Checkout date as `MM/DD/YY`.
    pub checkout_date: String,
}
