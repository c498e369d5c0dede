//! Observed holiday rules.
//!
//! Only two holidays are recognized: Independence Day (moved to the nearest
//! weekday when it lands on a weekend) and Labor Day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A recognized holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4th, observed on the nearest weekday.
    IndependenceDay,
    /// First Monday of September.
    LaborDay,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Returns the date on which Independence Day is observed in `year`.
///
/// July 4th on a Saturday is observed the Friday before, on a Sunday the
/// Monday after, otherwise on the day itself. Returns `None` only for years
/// outside chrono's calendar.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::observed_independence_day;
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday
/// assert_eq!(
///     observed_independence_day(2020),
///     NaiveDate::from_ymd_opt(2020, 7, 3)
/// );
/// ```
pub fn observed_independence_day(year: i32) -> Option<NaiveDate> {
    let fourth = NaiveDate::from_ymd_opt(year, 7, 4)?;
    let observed = match fourth.weekday() {
        Weekday::Sat => fourth - Duration::days(1),
        Weekday::Sun => fourth + Duration::days(1),
        _ => fourth,
    };
    Some(observed)
}

/// Returns Labor Day, the first Monday of September, for `year`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::labor_day;
/// use chrono::NaiveDate;
///
/// assert_eq!(labor_day(2015), NaiveDate::from_ymd_opt(2015, 9, 7));
/// ```
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

/// Returns the holiday observed on `date`, if any.
pub fn observed_holiday(date: NaiveDate) -> Option<Holiday> {
    let year = date.year();
    if observed_independence_day(year) == Some(date) {
        Some(Holiday::IndependenceDay)
    } else if labor_day(year) == Some(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

/// Returns true if `date` is an observed holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    observed_holiday(date).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_july_4th_on_saturday_observed_friday() {
        assert_eq!(observed_independence_day(2020), Some(date(2020, 7, 3)));
        assert!(is_holiday(date(2020, 7, 3)));
        assert!(!is_holiday(date(2020, 7, 4)));
    }

    #[test]
    fn test_july_4th_on_sunday_observed_monday() {
        assert_eq!(observed_independence_day(2021), Some(date(2021, 7, 5)));
        assert!(is_holiday(date(2021, 7, 5)));
        assert!(!is_holiday(date(2021, 7, 4)));
    }

    #[test]
    fn test_july_4th_on_weekday_observed_same_day() {
        // 2019-07-04 is a Thursday
        assert_eq!(observed_independence_day(2019), Some(date(2019, 7, 4)));
        // 2015-07-04 is a Saturday
        assert_eq!(observed_independence_day(2015), Some(date(2015, 7, 3)));
    }

    #[test]
    fn test_labor_day_when_september_starts_on_monday() {
        // 2014-09-01 is a Monday
        assert_eq!(labor_day(2014), Some(date(2014, 9, 1)));
    }

    #[test]
    fn test_labor_day_when_september_starts_on_tuesday() {
        // 2015-09-01 is a Tuesday
        assert_eq!(labor_day(2015), Some(date(2015, 9, 7)));
        // 2020-09-01 is a Tuesday
        assert_eq!(labor_day(2020), Some(date(2020, 9, 7)));
    }

    #[test]
    fn test_labor_day_is_always_a_monday_in_first_week() {
        for year in 1990..=2060 {
            let day = labor_day(year).unwrap();
            assert_eq!(day.weekday(), Weekday::Mon);
            assert_eq!(day.month(), 9);
            assert!(day.day() <= 7, "{} is not in the first week", day);
        }
    }

    #[test]
    fn test_observed_holiday_names() {
        assert_eq!(
            observed_holiday(date(2015, 9, 7)),
            Some(Holiday::LaborDay)
        );
        assert_eq!(
            observed_holiday(date(2019, 7, 4)),
            Some(Holiday::IndependenceDay)
        );
        assert_eq!(observed_holiday(date(2019, 12, 25)), None);
    }

    #[test]
    fn test_holiday_display() {
        assert_eq!(Holiday::IndependenceDay.to_string(), "Independence Day");
        assert_eq!(Holiday::LaborDay.to_string(), "Labor Day");
    }
}
