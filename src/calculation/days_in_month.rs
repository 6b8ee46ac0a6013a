//! Days-in-month resolution.
//!
//! Unpaid leave is prorated over the calendar length of the month it falls
//! in. This module resolves that length, including leap years.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in `month` of `year`.
///
/// The result is the last day of the month, found as the day before the
/// first of the following month. Months outside 1-12 roll over into
/// adjacent years by calendar arithmetic: month 13 is January of the next
/// year and month 0 is December of the previous one.
///
/// # Examples
///
/// ```
/// use statutory_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024), 29);
/// assert_eq!(days_in_month(2, 2023), 28);
/// assert_eq!(days_in_month(13, 2023), 31);
/// ```
pub fn days_in_month(month: i32, year: i32) -> u32 {
    let absolute_month = i64::from(year) * 12 + i64::from(month) - 1;
    let year = absolute_month.div_euclid(12);
    let month = (absolute_month.rem_euclid(12) + 1) as u32;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    i32::try_from(next_year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last_day| last_day.day())
        .unwrap_or_else(|| gregorian_days_in_month(year, month))
}

/// Fallback for years outside the range `chrono` can represent.
fn gregorian_days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}
