//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on every monetary amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds `amount` to cents, halves away from zero.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(5, 3)), Decimal::new(1, 2)); // 0.005 -> 0.01
/// assert_eq!(round_half_up(Decimal::new(1495, 3)), Decimal::new(150, 2)); // 1.495 -> 1.50
/// ```
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
