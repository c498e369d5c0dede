//! Serializable snapshot of a computed rental agreement.
//!
//! [`AgreementSummary`] is what the HTTP API returns: every value printed on
//! the agreement, the per-day billing schedule and the rendered report text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Brand, RentalAgreement, ToolCode, ToolType};
use crate::calculation::ScheduledDay;
use crate::report::render_report;

/// All derived values of an agreement, evaluated once.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::models::{AgreementSummary, RentalAgreement};
/// use chrono::NaiveDate;
///
/// let tool = *ToolCatalog::standard().lookup("CHNS").unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// let agreement = RentalAgreement::new(tool, 5, 25, checkout).unwrap();
///
/// let summary = AgreementSummary::from_agreement(&agreement);
/// assert_eq!(summary.charge_days, 3);
/// assert_eq!(summary.final_charge.to_string(), "3.35");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementSummary {
    /// Unique identifier of this agreement.
    pub agreement_id: Uuid,
    /// The rented tool's code.
    pub tool_code: ToolCode,
    /// The rented tool's category.
    pub tool_type: ToolType,
    /// The rented tool's manufacturer.
    pub tool_brand: Brand,
    /// Rental duration in days.
    pub rental_days: u32,
    /// The checkout date.
    pub checkout_date: NaiveDate,
    /// The due date.
    pub due_date: NaiveDate,
    /// Charge per chargeable day.
    pub daily_rental_charge: Decimal,
    /// Number of billed days.
    pub charge_days: u32,
    /// Charge before the discount.
    pub pre_discount_charge: Decimal,
    /// Discount percentage (0 to 100).
    pub discount_percentage: u8,
    /// Amount taken off by the discount.
    pub discount_amount: Decimal,
    /// Amount due.
    pub final_charge: Decimal,
    /// Every rental day with its billing outcome.
    pub schedule: Vec<ScheduledDay>,
    /// The printed agreement.
    pub report: String,
}

impl AgreementSummary {
    /// Evaluates every derived value of `agreement`.
    pub fn from_agreement(agreement: &RentalAgreement) -> Self {
        let tool = agreement.tool();
        Self {
            agreement_id: Uuid::new_v4(),
            tool_code: tool.code,
            tool_type: tool.tool_type,
            tool_brand: tool.brand,
            rental_days: agreement.rental_days(),
            checkout_date: agreement.checkout_date(),
            due_date: agreement.due_date(),
            daily_rental_charge: tool.daily_charge,
            charge_days: agreement.chargeable_days(),
            pre_discount_charge: agreement.pre_discount_total(),
            discount_percentage: agreement.discount_percentage(),
            discount_amount: agreement.discount_amount(),
            final_charge: agreement.final_charge(),
            schedule: agreement.charge_schedule(),
            report: render_report(agreement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCatalog;

    fn summary() -> AgreementSummary {
        let tool = *ToolCatalog::standard().lookup("JAKD").unwrap();
        let checkout = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
        let agreement = RentalAgreement::new(tool, 6, 0, checkout).unwrap();
        AgreementSummary::from_agreement(&agreement)
    }

    #[test]
    fn test_summary_matches_agreement() {
        let summary = summary();
        assert_eq!(summary.tool_code, ToolCode::Jakd);
        assert_eq!(summary.tool_brand, Brand::DeWalt);
        assert_eq!(summary.due_date, NaiveDate::from_ymd_opt(2015, 9, 9).unwrap());
        assert_eq!(summary.charge_days, 3);
        assert_eq!(summary.schedule.len(), 6);
        assert!(summary.report.contains("Final Charge: $8.97\n"));
    }

    #[test]
    fn test_summary_serializes_money_as_strings() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["pre_discount_charge"], "8.97");
        assert_eq!(json["daily_rental_charge"], "2.99");
        assert_eq!(json["tool_code"], "JAKD");
        assert_eq!(json["checkout_date"], "2015-09-03");
    }

    #[test]
    fn test_summary_round_trips() {
        let summary = summary();
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: AgreementSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, summary);
    }

    #[test]
    fn test_each_summary_gets_its_own_id() {
        assert_ne!(summary().agreement_id, summary().agreement_id);
    }
}
