//! Tool model and its enumerated attributes.
//!
//! Tools are immutable value records. Behavior never varies by tool beyond
//! the two charge flags, so plain enums and a single struct are enough.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RentalError;

/// The catalog code identifying a rentable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ToolCode {
    /// Werner ladder.
    Ladw,
    /// Stihl chainsaw.
    Chns,
    /// Ridgid jackhammer.
    Jakr,
    /// DeWalt jackhammer.
    Jakd,
}

impl ToolCode {
    /// Every tool code, in catalog order.
    pub const ALL: [ToolCode; 4] = [ToolCode::Ladw, ToolCode::Chns, ToolCode::Jakr, ToolCode::Jakd];

    /// Returns the four-letter code as printed on the agreement.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCode::Ladw => "LADW",
            ToolCode::Chns => "CHNS",
            ToolCode::Jakr => "JAKR",
            ToolCode::Jakd => "JAKD",
        }
    }
}

impl fmt::Display for ToolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a code exactly as printed; matching is case-sensitive.
///
/// # Example
///
/// ```
/// use tool_rental::models::ToolCode;
///
/// assert_eq!("JAKD".parse::<ToolCode>().unwrap(), ToolCode::Jakd);
/// assert!("jakd".parse::<ToolCode>().is_err());
/// ```
impl FromStr for ToolCode {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| RentalError::UnknownToolCode {
                code: s.to_string(),
            })
    }
}

/// The category of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    /// Ladder.
    Ladder,
    /// Chainsaw.
    Chainsaw,
    /// Jackhammer.
    Jackhammer,
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolType::Ladder => write!(f, "Ladder"),
            ToolType::Chainsaw => write!(f, "Chainsaw"),
            ToolType::Jackhammer => write!(f, "Jackhammer"),
        }
    }
}

/// The manufacturer of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    /// Werner.
    Werner,
    /// Stihl.
    Stihl,
    /// Ridgid.
    Ridgid,
    /// DeWalt.
    #[serde(rename = "dewalt")]
    DeWalt,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Werner => write!(f, "Werner"),
            Brand::Stihl => write!(f, "Stihl"),
            Brand::Ridgid => write!(f, "Ridgid"),
            Brand::DeWalt => write!(f, "DeWalt"),
        }
    }
}

/// A rentable tool and its billing policy.
///
/// # Example
///
/// ```
/// use tool_rental::models::{Brand, Tool, ToolCode, ToolType};
/// use rust_decimal::Decimal;
///
/// let ladder = Tool {
///     code: ToolCode::Ladw,
///     tool_type: ToolType::Ladder,
///     brand: Brand::Werner,
///     daily_charge: Decimal::new(199, 2),
///     charge_weekends: true,
///     charge_holidays: false,
/// };
/// assert_eq!(ladder.to_string(), "LADW (Werner Ladder)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The catalog code.
    pub code: ToolCode,
    /// The tool category.
    pub tool_type: ToolType,
    /// The manufacturer.
    pub brand: Brand,
    /// Charge per chargeable day.
    pub daily_charge: Decimal,
    /// Whether Saturdays and Sundays are billed.
    pub charge_weekends: bool,
    /// Whether observed holidays are billed.
    pub charge_holidays: bool,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.code, self.brand, self.tool_type)
    }
}
