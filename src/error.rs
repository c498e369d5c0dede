//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a checkout or a catalog load can produce.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// Input errors (`InvalidRentalDuration`, `InvalidDiscountPercentage`,
/// `UnknownToolCode`, `InvalidCheckoutDate`) are detected before any
/// agreement is built and are never corrected or defaulted.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::UnknownToolCode {
///     code: "LADX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown tool code: LADX");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RentalError {
    /// The rental day count was less than one.
    #[error("Rental day count must be 1 or greater, got {rental_days}")]
    InvalidRentalDuration {
        /// The rejected day count.
        rental_days: i64,
    },

    /// The discount percentage was outside 0..=100.
    #[error("Discount percentage must be in the range 0-100, got {discount_percentage}")]
    InvalidDiscountPercentage {
        /// The rejected percentage.
        discount_percentage: i64,
    },

    /// The tool code is not in the catalog.
    #[error("Unknown tool code: {code}")]
    UnknownToolCode {
        /// The code that was not found.
        code: String,
    },

    /// A checkout date could not be parsed as `MM/DD/YY`.
    #[error("Invalid checkout date '{input}': expected MM/DD/YY")]
    InvalidCheckoutDate {
        /// The raw input.
        input: String,
    },

    /// The due date falls outside the supported calendar.
    #[error("Due date for checkout {checkout_date} plus {rental_days} days is out of range")]
    DateOutOfRange {
        /// The checkout date.
        checkout_date: NaiveDate,
        /// The rental duration in days.
        rental_days: u32,
    },

    /// Catalog file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
