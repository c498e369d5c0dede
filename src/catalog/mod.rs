//! The tool catalog.
//!
//! A [`ToolCatalog`] maps each [`ToolCode`] to its fixed [`Tool`] record. The
//! standard catalog is built in; [`crate::config::ConfigLoader`] can build one
//! from a YAML file instead.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{RentalError, RentalResult};
use crate::models::{Brand, Tool, ToolCode, ToolType};

/// Read-only lookup table from tool code to tool.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::models::Brand;
///
/// let catalog = ToolCatalog::standard();
/// let tool = catalog.lookup("JAKR")?;
/// assert_eq!(tool.brand, Brand::Ridgid);
/// assert!(catalog.lookup("XXXX").is_err());
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: HashMap<ToolCode, Tool>,
}

impl ToolCatalog {
    /// Builds a catalog from tool records. A later record with the same code
    /// replaces an earlier one.
    pub fn new(tools: impl IntoIterator<Item = Tool>) -> Self {
        Self {
            tools: tools.into_iter().map(|tool| (tool.code, tool)).collect(),
        }
    }

    /// The standard rental catalog.
    pub fn standard() -> Self {
        Self::new([
            Tool {
                code: ToolCode::Ladw,
                tool_type: ToolType::Ladder,
                brand: Brand::Werner,
                daily_charge: Decimal::new(199, 2),
                charge_weekends: true,
                charge_holidays: false,
            },
            Tool {
                code: ToolCode::Chns,
                tool_type: ToolType::Chainsaw,
                brand: Brand::Stihl,
                daily_charge: Decimal::new(149, 2),
                charge_weekends: false,
                charge_holidays: true,
            },
            Tool {
                code: ToolCode::Jakr,
                tool_type: ToolType::Jackhammer,
                brand: Brand::Ridgid,
                daily_charge: Decimal::new(299, 2),
                charge_weekends: false,
                charge_holidays: false,
            },
            Tool {
                code: ToolCode::Jakd,
                tool_type: ToolType::Jackhammer,
                brand: Brand::DeWalt,
                daily_charge: Decimal::new(299, 2),
                charge_weekends: false,
                charge_holidays: false,
            },
        ])
    }

    /// Looks up a tool by its printed code.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownToolCode`] if `code` is not a known code
    /// or the code is not stocked in this catalog.
    pub fn lookup(&self, code: &str) -> RentalResult<&Tool> {
        let parsed: ToolCode = code.parse()?;
        self.get(parsed).ok_or_else(|| RentalError::UnknownToolCode {
            code: code.to_string(),
        })
    }

    /// Returns the tool for `code`, if stocked.
    pub fn get(&self, code: ToolCode) -> Option<&Tool> {
        self.tools.get(&code)
    }

    /// Returns the stocked codes in catalog order.
    pub fn codes(&self) -> Vec<ToolCode> {
        let mut codes: Vec<ToolCode> = self.tools.keys().copied().collect();
        codes.sort();
        codes
    }

    /// Returns the stocked tools in catalog order.
    pub fn tools(&self) -> Vec<&Tool> {
        self.codes()
            .into_iter()
            .filter_map(|code| self.tools.get(&code))
            .collect()
    }

    /// Returns the number of stocked tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if nothing is stocked.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
