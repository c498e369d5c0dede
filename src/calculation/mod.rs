//! Billing calculations for rental agreements.
//!
//! This module contains the date rules (weekend detection, observed
//! holidays, the rental date range), chargeable day counting and the
//! monetary rounding applied to every derived amount.

mod chargeable_days;
mod day_detection;
mod holidays;
mod rounding;

pub use chargeable_days::{ScheduledDay, charge_schedule, count_chargeable_days, rental_dates};
pub use day_detection::{DayClassification, classify_day, is_weekend};
pub use holidays::{Holiday, is_holiday, labor_day, observed_holiday, observed_independence_day};
pub use rounding::{CURRENCY_SCALE, round_half_up};
