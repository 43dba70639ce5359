//! Calendar-month arithmetic for the vesting schedule
//!
//! The schedule works at whole-month granularity: every data point is
//! anchored to the first day of its month and month differences ignore the
//! day-of-month entirely.

use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whole calendar months from `earlier` to `later`, day-of-month ignored.
/// Negative when `later` falls in an earlier month.
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    let l = later.year() as i64 * 12 + i64::from(later.month0());
    let e = earlier.year() as i64 * 12 + i64::from(earlier.month0());
    l - e
}

/// First day of the month `months` whole months after `date`'s month.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    month_start(date) + Months::new(months)
}

/// Short month label, e.g. "Mar 2027".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Parse a `YYYY-MM` month selector into the first day of that month.
pub fn parse_year_month(input: &str) -> Result<NaiveDate, String> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 2 {
        return Err(format!(
            "❌ Invalid month format: '{}'. Use YYYY-MM, e.g. 2027-03",
            input
        ));
    }

    let year: i32 = parts[0]
        .parse()
        .map_err(|_| format!("❌ Invalid year: '{}'", parts[0]))?;
    let month: u32 = parts[1]
        .parse()
        .map_err(|_| format!("❌ Invalid month: '{}'", parts[1]))?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(format!("❌ No such calendar month: {}-{:02}", year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2026, 8, 19)), date(2026, 8, 1));
        assert_eq!(month_start(date(2026, 8, 1)), date(2026, 8, 1));
    }

    #[test]
    fn test_months_between_ignores_days() {
        assert_eq!(months_between(date(2026, 8, 1), date(2026, 8, 31)), 0);
        assert_eq!(months_between(date(2026, 9, 1), date(2026, 8, 31)), 1);
        assert_eq!(months_between(date(2027, 8, 1), date(2026, 8, 1)), 12);
    }

    #[test]
    fn test_months_between_negative_for_future_start() {
        assert_eq!(months_between(date(2026, 8, 1), date(2027, 1, 1)), -5);
    }

    #[test]
    fn test_add_months_crosses_year_boundary() {
        assert_eq!(add_months(date(2026, 11, 15), 3), date(2027, 2, 1));
        assert_eq!(add_months(date(2026, 8, 1), 0), date(2026, 8, 1));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(date(2027, 3, 1)), "Mar 2027");
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2027-03").expect("parses"), date(2027, 3, 1));
        assert!(parse_year_month("2027").is_err());
        assert!(parse_year_month("2027-13").is_err());
        assert!(parse_year_month("20x7-03").is_err());
    }
}
