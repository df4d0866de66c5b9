// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Business-day calendar arithmetic (weekends only, no holiday table)

use chrono::{Datelike, Days, NaiveDate};

fn day_number(date: NaiveDate) -> i64 {
    // Sunday = 0 .. Saturday = 6
    i64::from(date.weekday().num_days_from_sunday())
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(day_number(date), 0 | 6)
}

/// Advance `date` by `days` business days, skipping weekends.
///
/// A start on a weekend first rolls forward to Monday, consuming one of the
/// requested days. `days == 0` returns the date unchanged, weekend or not.
pub fn add_business_days(date: NaiveDate, days: u32) -> NaiveDate {
    if days == 0 {
        return date;
    }

    let mut date = date;
    let mut days = u64::from(days);
    match day_number(date) {
        6 => {
            date = date + Days::new(2);
            days -= 1;
        }
        0 => {
            date = date + Days::new(1);
            days -= 1;
        }
        _ => {}
    }

    date = date + Days::new(days / 5 * 7);
    let mut extra = days % 5;
    if day_number(date) as u64 + extra > 5 {
        extra += 2;
    }

    date + Days::new(extra)
}

/// Number of business days between `start` and `end`.
///
/// Weekend endpoints are clamped to the nearest business day (start rolls
/// forward, end rolls back) before counting. Negative when `end` precedes
/// `start`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let start = match day_number(start) {
        6 => start + Days::new(2),
        0 => start + Days::new(1),
        _ => start,
    };
    let end = match day_number(end) {
        6 => end - Days::new(1),
        0 => end - Days::new(2),
        _ => end,
    };

    let diff = (end - start).num_days();
    let result = diff / 7 * 5 + diff % 7;

    if day_number(end) < day_number(start) {
        result - 2
    } else {
        result
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
