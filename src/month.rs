// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! First and last Gregorian day of a Jalali month.

use crate::arithmetic::{self, MAX_YEAR, MIN_YEAR};
use crate::date::JalaliDate;
use crate::error::{CalendarError, Result};
use chrono::NaiveDate;

fn resolve_year(year: Option<i32>) -> Result<i32> {
    match year {
        Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
        Some(year) => Err(CalendarError::out_of_range("Jalali year", year)),
        None => Ok(JalaliDate::now()?.year()),
    }
}

/// First day of the one-based Jalali `month`.
///
/// With `year == None` the Jalali year of the local wall clock is used.
pub fn start_of_month(month: u32, year: Option<i32>) -> Result<NaiveDate> {
    let year = resolve_year(year)?;
    JalaliDate::new(year, month, 1)?.to_gregorian_date()
}

/// Last day of the one-based Jalali `month`.
///
/// With `year == None` the Jalali year of the local wall clock is used.
pub fn end_of_month(month: u32, year: Option<i32>) -> Result<NaiveDate> {
    let year = resolve_year(year)?;
    let start = start_of_month(month, Some(year))?;
    let last = arithmetic::days_in_month(year, month) - 1;
    start
        .checked_add_days(chrono::Days::new(u64::from(last)))
        .ok_or_else(|| CalendarError::out_of_range("Jalali month", month))
}

/// Inclusive `(first, last)` Gregorian days of a Jalali month.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    Ok((
        start_of_month(month, Some(year))?,
        end_of_month(month, Some(year))?,
    ))
}
