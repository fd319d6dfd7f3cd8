//! Calendar arithmetic used by the grid and the controller.
//!
//! Thin wrappers over `chrono` so that every date operation in the crate goes
//! through one place: day offsets, week starts, calendar-date equality and
//! year shifts.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// First day of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl WeekStart {
    /// The chrono weekday a week begins on
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Number of days between the week start and `date`'s weekday (0..=6)
    pub fn days_into_week(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

impl FromStr for WeekStart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(Error::MisconfiguredGrid(format!(
                "unknown week start day '{}', expected sunday or monday",
                other
            ))),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => f.write_str("sunday"),
            WeekStart::Monday => f.write_str("monday"),
        }
    }
}

/// Add a signed number of days, saturating at chrono's representable range
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Start of the week containing `date`
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    add_days(date, -(week_start.days_into_week(date) as i64))
}

/// Last day of the week containing `date`
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    add_days(start_of_week(date, week_start), 6)
}

/// Whether `date` falls in the week that begins on `week_begin`
pub fn is_in_week(date: NaiveDate, week_begin: NaiveDate) -> bool {
    date >= week_begin && date <= add_days(week_begin, 6)
}

/// Calendar-date equality for anything carrying a date (not instant equality)
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

/// Shift by whole years, clamping the day to the end of the target month
/// (Feb 29 becomes Feb 28 in a common year).
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let months = Months::new(years.unsigned_abs().saturating_mul(12));
    let shifted = if years >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(if years >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("'{}': {}", s, e)))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_week_monday() {
        // 2024-05-15 is a Wednesday
        assert_eq!(start_of_week(date(2024, 5, 15), WeekStart::Monday), date(2024, 5, 13));
        assert_eq!(start_of_week(date(2024, 5, 13), WeekStart::Monday), date(2024, 5, 13));
        assert_eq!(start_of_week(date(2024, 5, 19), WeekStart::Monday), date(2024, 5, 13));
    }

    #[test]
    fn test_start_of_week_sunday() {
        assert_eq!(start_of_week(date(2024, 5, 15), WeekStart::Sunday), date(2024, 5, 12));
        assert_eq!(start_of_week(date(2024, 5, 12), WeekStart::Sunday), date(2024, 5, 12));
        assert_eq!(start_of_week(date(2024, 5, 18), WeekStart::Sunday), date(2024, 5, 12));
    }

    #[test]
    fn test_end_of_week_and_membership() {
        let begin = date(2024, 5, 13);
        assert_eq!(end_of_week(date(2024, 5, 15), WeekStart::Monday), date(2024, 5, 19));
        assert!(is_in_week(date(2024, 5, 19), begin));
        assert!(!is_in_week(date(2024, 5, 20), begin));
        assert!(!is_in_week(date(2024, 5, 12), begin));
    }

    #[test]
    fn test_add_days_signed() {
        assert_eq!(add_days(date(2024, 3, 1), -1), date(2024, 2, 29));
        assert_eq!(add_days(date(2024, 12, 31), 1), date(2025, 1, 1));
        assert_eq!(add_days(date(2024, 1, 1), 0), date(2024, 1, 1));
    }

    #[test]
    fn test_shift_years_clamps_leap_day() {
        assert_eq!(shift_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(shift_years(date(2024, 2, 29), -4), date(2020, 2, 29));
        assert_eq!(shift_years(date(2024, 6, 10), -2), date(2022, 6, 10));
    }

    #[test]
    fn test_same_day_ignores_time() {
        let morning = NaiveDateTime::parse_from_str("2024-05-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let night = NaiveDateTime::parse_from_str("2024-05-15 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert!(is_same_day(&morning, &night));
        assert!(is_same_day(&morning, &date(2024, 5, 15)));
        assert!(!is_same_day(&morning, &date(2024, 5, 16)));
    }

    #[test]
    fn test_week_start_parse() {
        assert_eq!("Sunday".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert_eq!("mon".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert!(matches!(
            "friday".parse::<WeekStart>(),
            Err(Error::MisconfiguredGrid(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-15").unwrap(), date(2024, 5, 15));
        assert!(matches!(parse_date("15/05/2024"), Err(Error::InvalidDate(_))));
    }
}
