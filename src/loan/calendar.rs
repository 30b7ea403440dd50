//! Due-date arithmetic for monthly payment periods

use chrono::{Datelike, Days, NaiveDate};

/// Move a date forward one calendar month, keeping the day of month.
///
/// If the target month is too short, the surplus days roll into the month
/// after it: Jan 31 becomes Mar 3 in a non-leap year (Mar 2 in a leap year).
pub fn advance_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day() - 1))))
        .unwrap_or(NaiveDate::MAX)
}

/// Short month/year label for a due date, e.g. `Jan 2024`
pub fn period_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_keeps_day_of_month() {
        assert_eq!(advance_month(ymd(2024, 1, 15)), ymd(2024, 2, 15));
        assert_eq!(advance_month(ymd(2024, 12, 15)), ymd(2025, 1, 15));
    }

    #[test]
    fn test_month_end_rolls_over() {
        assert_eq!(advance_month(ymd(2023, 1, 31)), ymd(2023, 3, 3));
        assert_eq!(advance_month(ymd(2024, 1, 31)), ymd(2024, 3, 2));
        assert_eq!(advance_month(ymd(2024, 3, 31)), ymd(2024, 5, 1));
    }

    #[test]
    fn test_label() {
        assert_eq!(period_label(ymd(2024, 1, 15)), "Jan 2024");
        assert_eq!(period_label(ymd(2025, 12, 1)), "Dec 2025");
    }
}
