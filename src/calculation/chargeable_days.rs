//! Chargeable day counting.
//!
//! A rental covers every date strictly after checkout up to and including the
//! due date. Each of those dates is classified and billed per the tool's
//! weekend/holiday policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_detection::{DayClassification, classify_day};
use crate::models::Tool;

/// One day of a rental with its billing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDay {
    /// The weekend/holiday classification of the date.
    #[serde(flatten)]
    pub classification: DayClassification,
    /// Whether the renter is billed for this date.
    pub charged: bool,
}

/// Iterates the dates a rental covers: `checkout` exclusive to `due` inclusive.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::rental_dates;
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2020, 7, 5).unwrap();
/// let dates: Vec<_> = rental_dates(checkout, due).collect();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2020, 7, 3).unwrap());
/// ```
pub fn rental_dates(checkout: NaiveDate, due: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    checkout
        .iter_days()
        .skip(1)
        .take_while(move |date| *date <= due)
}

/// Builds the per-day billing schedule for renting `tool` from `checkout` to `due`.
pub fn charge_schedule(tool: &Tool, checkout: NaiveDate, due: NaiveDate) -> Vec<ScheduledDay> {
    rental_dates(checkout, due)
        .map(|date| {
            let classification = classify_day(date);
            ScheduledDay {
                classification,
                charged: classification.is_chargeable_for(tool),
            }
        })
        .collect()
}

/// Counts the billed days when renting `tool` from `checkout` to `due`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::count_chargeable_days;
/// use tool_rental::catalog::ToolCatalog;
/// use chrono::NaiveDate;
///
/// let catalog = ToolCatalog::standard();
/// let ladder = catalog.lookup("LADW").unwrap();
///
/// // Fri 07/03/20 is the observed holiday, Sat and Sun are billed for a ladder
/// let days = count_chargeable_days(
///     ladder,
///     NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 7, 5).unwrap(),
/// );
/// assert_eq!(days, 2);
/// ```
pub fn count_chargeable_days(tool: &Tool, checkout: NaiveDate, due: NaiveDate) -> u32 {
    let count = rental_dates(checkout, due)
        .filter(|date| classify_day(*date).is_chargeable_for(tool))
        .count();
    // The number of dates is bounded by the u32 rental duration.
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCatalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tool(code: &str) -> Tool {
        *ToolCatalog::standard().lookup(code).unwrap()
    }

    #[test]
    fn test_rental_dates_excludes_checkout_and_includes_due() {
        let dates: Vec<_> = rental_dates(date(2015, 7, 2), date(2015, 7, 4)).collect();
        assert_eq!(dates, vec![date(2015, 7, 3), date(2015, 7, 4)]);
    }

    #[test]
    fn test_rental_dates_crosses_year_boundary() {
        let dates: Vec<_> = rental_dates(date(2020, 12, 30), date(2021, 1, 2)).collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[1], date(2021, 1, 1));
    }

    #[test]
    fn test_chainsaw_over_july_4th_2015() {
        // Fri 3 holiday (charged), Sat 4, Sun 5 free, Mon 6, Tue 7 charged
        let days = count_chargeable_days(&tool("CHNS"), date(2015, 7, 2), date(2015, 7, 7));
        assert_eq!(days, 3);
    }

    #[test]
    fn test_jackhammer_over_labor_day_2015() {
        // Fri 4 charged, Sat 5, Sun 6, Mon 7 (Labor Day) free, Tue 8, Wed 9 charged
        let days = count_chargeable_days(&tool("JAKD"), date(2015, 9, 3), date(2015, 9, 9));
        assert_eq!(days, 3);
    }

    #[test]
    fn test_jackhammer_over_july_4th_2020() {
        // Fri 3 holiday, Sat 4, Sun 5 free; Mon 6 charged
        let days = count_chargeable_days(&tool("JAKR"), date(2020, 7, 2), date(2020, 7, 6));
        assert_eq!(days, 1);
    }

    #[test]
    fn test_schedule_matches_count() {
        let ladder = tool("LADW");
        let schedule = charge_schedule(&ladder, date(2020, 7, 2), date(2020, 7, 5));
        assert_eq!(schedule.len(), 3);
        assert!(!schedule[0].charged); // observed July 4th
        assert!(schedule[1].charged);
        assert!(schedule[2].charged);

        let charged = schedule.iter().filter(|d| d.charged).count() as u32;
        assert_eq!(
            charged,
            count_chargeable_days(&ladder, date(2020, 7, 2), date(2020, 7, 5))
        );
    }

    #[test]
    fn test_scheduled_day_serialization_is_flat() {
        let schedule = charge_schedule(&tool("JAKR"), date(2015, 9, 6), date(2015, 9, 7));
        let json = serde_json::to_string(&schedule[0]).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2015-09-07","weekend":false,"holiday":"labor_day","charged":false}"#
        );
    }
}
