//! Core data models for the tool rental engine.
//!
//! This module contains the tool record, the rental agreement and the
//! serializable agreement summary.

mod agreement;
mod summary;
mod tool;

pub use agreement::{MAX_DISCOUNT_PERCENTAGE, RentalAgreement};
pub use summary::AgreementSummary;
pub use tool::{Brand, Tool, ToolCode, ToolType};
