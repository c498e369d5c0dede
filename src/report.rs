//! Agreement report rendering and reference-locale formatting.
//!
//! Dates use `MM/DD/YY` for both input and output. Money is printed as
//! `$` with comma-grouped dollars and exactly two decimals.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::{CURRENCY_SCALE, round_half_up};
use crate::error::{RentalError, RentalResult};
use crate::models::RentalAgreement;

/// The `chrono` pattern for agreement dates.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Formats a date as `MM/DD/YY`.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(format_date(NaiveDate::from_ymd_opt(2020, 7, 5).unwrap()), "07/05/20");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `MM/DD/YY` date. Two-digit years always land in 2000 to 2099.
///
/// # Errors
///
/// Returns [`RentalError::InvalidCheckoutDate`] if `input` is not a valid
/// `MM/DD/YY` date.
///
/// # Example
///
/// ```
/// use tool_rental::report::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("09/03/15")?, NaiveDate::from_ymd_opt(2015, 9, 3).unwrap());
/// assert_eq!(parse_date("01/01/99")?, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
/// assert!(parse_date("2015-09-03").is_err());
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
pub fn parse_date(input: &str) -> RentalResult<NaiveDate> {
    let invalid = || RentalError::InvalidCheckoutDate {
        input: input.to_string(),
    };
    let trimmed = input.trim();
    // Exactly MM/DD/YY; chrono alone would also accept single digits.
    let well_formed = trimmed.len() == 8
        && trimmed
            .char_indices()
            .all(|(i, c)| if i == 2 || i == 5 { c == '/' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(invalid());
    }

    let parsed = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())?;
    // chrono maps 69-99 to the 1900s
    if parsed.year() < 2000 {
        parsed.with_year(parsed.year() + 100).ok_or_else(invalid)
    } else {
        Ok(parsed)
    }
}

/// Formats an amount as US currency, e.g. `$1,234.50`.
///
/// The amount is rounded half-up to cents first.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(398, 2)), "$3.98");
/// assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
/// assert_eq!(format_currency(Decimal::ZERO), "$0.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut cents = round_half_up(amount);
    cents.rescale(CURRENCY_SCALE);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    let digits = cents.abs().to_string();
    let (dollars, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{}", grouped, fraction)
    } else {
        format!("${}.{}", grouped, fraction)
    }
}

/// Renders the printed rental agreement, one field per line.
///
/// # Example
///
/// ```
/// use tool_rental::catalog::ToolCatalog;
/// use tool_rental::models::RentalAgreement;
/// use tool_rental::report::render_report;
/// use chrono::NaiveDate;
///
/// let tool = *ToolCatalog::standard().lookup("LADW").unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let agreement = RentalAgreement::new(tool, 3, 10, checkout).unwrap();
///
/// let report = render_report(&agreement);
/// assert!(report.starts_with("Tool code: LADW\n"));
/// assert!(report.ends_with("Final Charge: $3.58\n"));
/// ```
pub fn render_report(agreement: &RentalAgreement) -> String {
    let tool = agreement.tool();
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Tool code: {}", tool.code);
    let _ = writeln!(out, "Tool type: {}", tool.tool_type);
    let _ = writeln!(out, "Tool brand: {}", tool.brand);
    let _ = writeln!(out, "Rental days: {}", agreement.rental_days());
    let _ = writeln!(out, "Check out date: {}", format_date(agreement.checkout_date()));
    let _ = writeln!(out, "Due date: {}", format_date(agreement.due_date()));
    let _ = writeln!(out, "Daily rental charge: {}", format_currency(tool.daily_charge));
    let _ = writeln!(out, "Charge days: {}", agreement.chargeable_days());
    let _ = writeln!(
        out,
        "Pre-discount charge: {}",
        format_currency(agreement.pre_discount_total())
    );
    let _ = writeln!(out, "Discount percentage: {}%", agreement.discount_percentage());
    let _ = writeln!(out, "Discount amount: {}", format_currency(agreement.discount_amount()));
    let _ = writeln!(out, "Final Charge: {}", format_currency(agreement.final_charge()));
    out
}

impl RentalAgreement {
    /// Renders the printed agreement; see [`render_report`].
    pub fn to_report(&self) -> String {
        render_report(self)
    }
}
