//! Day classification for rental billing.
//!
//! This module decides, for any calendar date, whether it is a weekend day
//! and whether it is an observed holiday. The two are independent: a date can
//! be both.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::holidays::{Holiday, observed_holiday};
use crate::models::Tool;

/// The weekend/holiday classification of a single date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{classify_day, Holiday};
/// use chrono::NaiveDate;
///
/// // 2020-07-03 is the Friday on which July 4th 2020 was observed
/// let day = classify_day(NaiveDate::from_ymd_opt(2020, 7, 3).unwrap());
/// assert!(!day.weekend);
/// assert_eq!(day.holiday, Some(Holiday::IndependenceDay));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The classified date.
    pub date: NaiveDate,
    /// True on Saturday and Sunday.
    pub weekend: bool,
    /// The holiday observed on this date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<Holiday>,
}

impl DayClassification {
    /// Returns true if the date is an observed holiday.
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// Returns true if renting `tool` over this date is billed.
    ///
    /// A plain weekday is always billed. Otherwise each applicable flag is
    /// checked independently, so a weekend holiday is billed if either the
    /// weekend or the holiday flag allows it.
    pub fn is_chargeable_for(&self, tool: &Tool) -> bool {
        let holiday = self.is_holiday();
        (!self.weekend && !holiday)
            || (self.weekend && tool.charge_weekends)
            || (holiday && tool.charge_holidays)
    }
}

/// Returns true if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies a date as weekend and/or observed holiday.
pub fn classify_day(date: NaiveDate) -> DayClassification {
    DayClassification {
        date,
        weekend: is_weekend(date),
        holiday: observed_holiday(date),
    }
}
