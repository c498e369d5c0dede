//! The rental agreement and its derived charges.
//!
//! A [`RentalAgreement`] stores the tool, the three checkout inputs, and the
//! due date and chargeable day count computed from them. Every charge is
//! derived from that count and rounded half-up to cents at each step, so the
//! discount is taken from the already-rounded pre-discount total.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::Tool;
use crate::calculation::{ScheduledDay, charge_schedule, count_chargeable_days, round_half_up};
use crate::error::{RentalError, RentalResult};

/// Highest accepted discount percentage.
pub const MAX_DISCOUNT_PERCENTAGE: u8 = 100;

/// An immutable agreement to rent one tool.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::models::RentalAgreement;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let catalog = ToolCatalog::standard();
/// let tool = *catalog.lookup("LADW").unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
///
/// let agreement = RentalAgreement::new(tool, 3, 10, checkout).unwrap();
/// assert_eq!(agreement.due_date(), NaiveDate::from_ymd_opt(2020, 7, 5).unwrap());
/// assert_eq!(agreement.chargeable_days(), 2);
/// assert_eq!(agreement.pre_discount_total(), Decimal::new(398, 2));
/// assert_eq!(agreement.discount_amount(), Decimal::new(40, 2));
/// assert_eq!(agreement.final_charge(), Decimal::new(358, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalAgreement {
    tool: Tool,
    rental_days: u32,
    discount_percentage: u8,
    checkout_date: NaiveDate,
    // Memoized; all inputs are immutable.
    due_date: NaiveDate,
    chargeable_days: u32,
}

impl RentalAgreement {
    /// Builds an agreement, rejecting out-of-range inputs.
    ///
    /// # Errors
    ///
    /// - [`RentalError::InvalidRentalDuration`] if `rental_days` is zero
    /// - [`RentalError::InvalidDiscountPercentage`] if `discount_percentage` exceeds 100
    /// - [`RentalError::DateOutOfRange`] if the due date is past the end of the calendar
    pub fn new(
        tool: Tool,
        rental_days: u32,
        discount_percentage: u8,
        checkout_date: NaiveDate,
    ) -> RentalResult<Self> {
        if rental_days < 1 {
            return Err(RentalError::InvalidRentalDuration {
                rental_days: i64::from(rental_days),
            });
        }
        if discount_percentage > MAX_DISCOUNT_PERCENTAGE {
            return Err(RentalError::InvalidDiscountPercentage {
                discount_percentage: i64::from(discount_percentage),
            });
        }
        let due_date = checkout_date
            .checked_add_days(Days::new(u64::from(rental_days)))
            .ok_or(RentalError::DateOutOfRange {
                checkout_date,
                rental_days,
            })?;

        let chargeable_days = count_chargeable_days(&tool, checkout_date, due_date);

        Ok(Self {
            tool,
            rental_days,
            discount_percentage,
            checkout_date,
            due_date,
            chargeable_days,
        })
    }

    /// Returns the rented tool.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Returns the rental duration in days.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// Returns the discount percentage (0 to 100).
    pub fn discount_percentage(&self) -> u8 {
        self.discount_percentage
    }

    /// Returns the checkout date.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Returns the checkout date plus the rental days.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Counts the billed days between the day after checkout and the due date.
    pub fn chargeable_days(&self) -> u32 {
        self.chargeable_days
    }

    /// Returns every day of the rental with its billing outcome.
    ///
    /// Walks the whole rental period on every call.
    pub fn charge_schedule(&self) -> Vec<ScheduledDay> {
        charge_schedule(&self.tool, self.checkout_date, self.due_date)
    }

    /// Chargeable days times the daily charge, rounded to cents.
    pub fn pre_discount_total(&self) -> Decimal {
        round_half_up(Decimal::from(self.chargeable_days()) * self.tool.daily_charge)
    }

    /// The discount taken from the rounded pre-discount total, rounded to cents.
    pub fn discount_amount(&self) -> Decimal {
        let rate = Decimal::from(self.discount_percentage) / Decimal::ONE_HUNDRED;
        round_half_up(self.pre_discount_total() * rate)
    }

    /// Pre-discount total less the discount, rounded to cents.
    pub fn final_charge(&self) -> Decimal {
        round_half_up(self.pre_discount_total() - self.discount_amount())
    }
}
