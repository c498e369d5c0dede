//! Checkout: validate raw inputs and build the rental agreement.

use chrono::NaiveDate;
use tracing::debug;

use crate::catalog::ToolCatalog;
use crate::error::{RentalError, RentalResult};
use crate::models::{MAX_DISCOUNT_PERCENTAGE, RentalAgreement};

/// Validates raw checkout inputs and builds the agreement.
///
/// Checks run in a fixed order: rental days, then discount, then tool code.
/// Inputs are signed so that negative values are rejected rather than
/// wrapped.
///
/// # Errors
///
/// - [`RentalError::InvalidRentalDuration`] if `rental_days < 1`
/// - [`RentalError::InvalidDiscountPercentage`] if `discount_percentage` is outside 0 to 100
/// - [`RentalError::UnknownToolCode`] if `tool_code` is not in `catalog`
/// - [`RentalError::DateOutOfRange`] if the due date is past the end of the calendar
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::checkout::compute_agreement;
/// use tool_rental::error::RentalError;
/// use chrono::NaiveDate;
///
/// let catalog = ToolCatalog::standard();
/// let checkout = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
///
/// let result = compute_agreement(&catalog, "JAKR", 5, 101, checkout);
/// assert!(matches!(result, Err(RentalError::InvalidDiscountPercentage { .. })));
///
/// let agreement = compute_agreement(&catalog, "JAKD", 6, 0, checkout)?;
/// assert_eq!(agreement.chargeable_days(), 3);
/// # Ok::<(), RentalError>(())
/// ```
pub fn compute_agreement(
    catalog: &ToolCatalog,
    tool_code: &str,
    rental_days: i64,
    discount_percentage: i64,
    checkout_date: NaiveDate,
) -> RentalResult<RentalAgreement> {
    let days = u32::try_from(rental_days)
        .ok()
        .filter(|days| *days >= 1)
        .ok_or(RentalError::InvalidRentalDuration { rental_days })?;

    let discount = u8::try_from(discount_percentage)
        .ok()
        .filter(|pct| *pct <= MAX_DISCOUNT_PERCENTAGE)
        .ok_or(RentalError::InvalidDiscountPercentage {
            discount_percentage,
        })?;

    let tool = *catalog.lookup(tool_code)?;

    debug!(
        tool = %tool.code,
        rental_days = days,
        discount_percentage = discount,
        checkout_date = %checkout_date,
        "Building rental agreement"
    );

    RentalAgreement::new(tool, days, discount, checkout_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_discount_of_101_rejected() {
        let result = compute_agreement(&ToolCatalog::standard(), "JAKR", 5, 101, date(2015, 9, 3));
        assert_eq!(
            result.unwrap_err(),
            RentalError::InvalidDiscountPercentage {
                discount_percentage: 101
            }
        );
    }

    #[test]
    fn test_negative_discount_rejected() {
        let result = compute_agreement(&ToolCatalog::standard(), "JAKR", 5, -1, date(2015, 9, 3));
        assert_eq!(
            result.unwrap_err(),
            RentalError::InvalidDiscountPercentage {
                discount_percentage: -1
            }
        );
    }

    #[test]
    fn test_zero_days_rejected() {
        let result = compute_agreement(&ToolCatalog::standard(), "LADW", 0, 10, date(2020, 7, 2));
        assert_eq!(
            result.unwrap_err(),
            RentalError::InvalidRentalDuration { rental_days: 0 }
        );
    }

    #[test]
    fn test_negative_and_oversized_days_rejected() {
        let catalog = ToolCatalog::standard();
        for days in [-3, i64::from(u32::MAX) + 1] {
            assert_eq!(
                compute_agreement(&catalog, "LADW", days, 0, date(2020, 7, 2)).unwrap_err(),
                RentalError::InvalidRentalDuration { rental_days: days }
            );
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let result = compute_agreement(&ToolCatalog::standard(), "DRIL", 1, 0, date(2020, 7, 2));
        assert_eq!(
            result.unwrap_err(),
            RentalError::UnknownToolCode {
                code: "DRIL".to_string()
            }
        );
    }

    #[test]
    fn test_duration_checked_before_discount_and_code() {
        let result = compute_agreement(&ToolCatalog::standard(), "DRIL", 0, 500, date(2020, 7, 2));
        assert!(matches!(
            result,
            Err(RentalError::InvalidRentalDuration { .. })
        ));
    }

    #[test]
    fn test_discount_checked_before_code() {
        let result = compute_agreement(&ToolCatalog::standard(), "DRIL", 1, 500, date(2020, 7, 2));
        assert!(matches!(
            result,
            Err(RentalError::InvalidDiscountPercentage { .. })
        ));
    }

    #[test]
    fn test_boundary_discounts_accepted() {
        let catalog = ToolCatalog::standard();
        for pct in [0, 100] {
            let agreement = compute_agreement(&catalog, "LADW", 1, pct, date(2020, 7, 2)).unwrap();
            assert_eq!(i64::from(agreement.discount_percentage()), pct);
        }
    }

    #[test]
    fn test_valid_checkout_builds_agreement() {
        let agreement =
            compute_agreement(&ToolCatalog::standard(), "JAKR", 4, 50, date(2020, 7, 2)).unwrap();
        assert_eq!(agreement.rental_days(), 4);
        assert_eq!(agreement.final_charge(), Decimal::new(149, 2));
    }
}
