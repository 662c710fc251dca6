use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The one accepted date format, day granularity.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error)]
pub enum DateError {
    #[error("ugyldig dato '{input}': forventet DD.MM.YYYY")]
    InvalidDate { input: String },
}

/// One friend and the date of last contact. The date is kept as the stored
/// text so it round-trips byte-identical through insert and list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub last_contact: String,
}

pub fn parse_contact_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateError::InvalidDate {
        input: input.to_string(),
    })
}

pub fn format_contact_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Fixed, non-calendar-accurate decomposition of a day count: 365-day years,
/// 30-day months, 7-day weeks. Not leap-year aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedBreakdown {
    pub total_days: i64,
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl ElapsedBreakdown {
    pub fn from_total_days(total_days: i64) -> Self {
        let years = total_days / 365;
        let mut rem = total_days % 365;
        let months = rem / 30;
        rem %= 30;
        let weeks = rem / 7;
        let days = rem % 7;
        Self {
            total_days,
            years,
            months,
            weeks,
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_date() {
        let d = parse_contact_date("10.01.2025").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn parse_rejects_other_formats() {
        assert!(parse_contact_date("2025-01-10").is_err());
        assert!(parse_contact_date("10/01/2025").is_err());
        assert!(parse_contact_date("not a date").is_err());
        assert!(parse_contact_date("").is_err());
    }

    #[test]
    fn format_round_trip() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let s = format_contact_date(d);
        assert_eq!(s, "05.01.2025");
        assert_eq!(parse_contact_date(&s).unwrap(), d);
    }

    #[test]
    fn breakdown_week_and_days() {
        let b = ElapsedBreakdown::from_total_days(9);
        assert_eq!(b.years, 0);
        assert_eq!(b.months, 0);
        assert_eq!(b.weeks, 1);
        assert_eq!(b.days, 2);
    }

    #[test]
    fn breakdown_years_skip_empty_months() {
        // 5 non-calendar years plus 11 days.
        let b = ElapsedBreakdown::from_total_days(1836);
        assert_eq!(b.years, 5);
        assert_eq!(b.months, 0);
        assert_eq!(b.weeks, 1);
        assert_eq!(b.days, 4);
    }

    #[test]
    fn breakdown_all_units() {
        // 365 + 2*30 + 7 + 3
        let b = ElapsedBreakdown::from_total_days(435);
        assert_eq!(b.years, 1);
        assert_eq!(b.months, 2);
        assert_eq!(b.weeks, 1);
        assert_eq!(b.days, 3);
    }

    #[test]
    fn breakdown_zero() {
        let b = ElapsedBreakdown::from_total_days(0);
        assert_eq!(b.years, 0);
        assert_eq!(b.months, 0);
        assert_eq!(b.weeks, 0);
        assert_eq!(b.days, 0);
    }
}
