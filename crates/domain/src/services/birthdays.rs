//! Upcoming-birthday window computation.
//!
//! Birthdays recur yearly, so the comparison is on month/day only. Comparing
//! full dates would miss every contact born in an earlier year and break when
//! the window crosses into January.

use chrono::{Datelike, Duration, NaiveDate};

/// Number of days ahead (inclusive) a birthday counts as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Returns the `MM-DD` strings covered by the window `[today, today + 7]`.
///
/// The result is ordered soonest-first, so callers can sort matches by their
/// position in the window. In a year without a Feb 29, the entry for Feb 28
/// is followed by `02-29`, so leap-day birthdays are picked up on Feb 28.
pub fn upcoming_month_days(today: NaiveDate) -> Vec<String> {
    let mut window = Vec::with_capacity(UPCOMING_WINDOW_DAYS as usize + 2);
    for offset in 0..=UPCOMING_WINDOW_DAYS {
        let day = today + Duration::days(offset);
        window.push(day.format("%m-%d").to_string());
        if day.month() == 2 && day.day() == 28 && !has_leap_day(day.year()) {
            window.push("02-29".to_string());
        }
    }
    window
}

fn has_leap_day(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
