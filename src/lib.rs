//! Tool Rental Engine
//!
//! This crate computes rental agreements for a tool-rental point of sale:
//! which days of a rental are billable for a given tool, the charges before
//! and after discount, and the printed agreement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
