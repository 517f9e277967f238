// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Jalali calendar arithmetic
//!
//! Leap-year cycle, year anchors and month lengths of the solar Hijri
//! calendar.
//!
//! ## Leap rule
//!
//! The leap cycle is **not** the plain 33-year arithmetic rule. It follows
//! Kazimierz Borkowski's break-table algorithm (*The Persian calendar for
//! 3000 years*, Earth, Moon and Planets 74, 1996), which reproduces the
//! astronomical calendar (vernal equinox relative to Tehran noon) for the
//! whole supported span. Between two consecutive entries of [`BREAKS`] the
//! leap years recur on a regular 33-year pattern; the break years are where
//! the astronomical drift forces the pattern to shift.
//!
//! ## Valid range
//!
//! Jalali years [`MIN_YEAR`]`..=`[`MAX_YEAR`], i.e. Gregorian
//! `0622-03-22 ..= 3799-03-19`. 1/1/1 is also the minimum date accepted by the
//! platform Persian calendars this crate is compatible with.

use crate::error::{CalendarError, Result};
use chrono::{Datelike, NaiveDate};

/// First supported Jalali year.
pub const MIN_YEAR: i32 = 1;

/// Last supported Jalali year.
pub const MAX_YEAR: i32 = 3177;

/// Number of days in Farvardin..Shahrivar (six 31-day months).
const FIRST_HALF_DAYS: u32 = 186;

/// Jalali years at which the 33-year leap pattern shifts.
#[rustfmt::skip]
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// Where a Jalali year sits in the leap cycle and where it starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct YearInfo {
    /// Years since the last leap year; `0` means this year is leap.
    since_leap: i32,
    /// Gregorian year containing Farvardin 1.
    gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls.
    march_day: u32,
}

#[inline]
fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::out_of_range("Jalali year", year))
    }
}

/// Break-table evaluation. `year` must already be range checked.
fn year_info(year: i32) -> YearInfo {
    let gregorian_year = year + 621;
    let mut leap_count = -14;
    let mut previous = BREAKS[0];
    let mut jump = 0;

    for &brk in &BREAKS[1..] {
        jump = brk - previous;
        if year < brk {
            break;
        }
        leap_count += jump / 33 * 8 + (jump % 33) / 4;
        previous = brk;
    }

    let mut n = year - previous;
    leap_count += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_count += 1;
    }

    // Gregorian leap days accumulated since the calendar epoch.
    let gregorian_leaps = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_count - gregorian_leaps;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut since_leap = ((n + 1) % 33 - 1) % 4;
    if since_leap == -1 {
        since_leap = 4;
    }

    YearInfo {
        since_leap,
        gregorian_year,
        march_day: march_day as u32,
    }
}

/// Returns `true` when `year` has 366 days (Esfand has 30 days).
///
/// Years outside the supported span are reported as common years.
pub fn is_leap_year(year: i32) -> bool {
    check_year(year).is_ok() && year_info(year).since_leap == 0
}

/// Number of days in the given one-based month, `0` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Number of days in the given Jalali year.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Gregorian date of Farvardin 1 (Nowruz) of `year`.
pub fn farvardin_first(year: i32) -> Result<NaiveDate> {
    check_year(year)?;
    let info = year_info(year);
    NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day)
        .ok_or_else(|| CalendarError::out_of_range("Jalali year", year))
}

/// Zero-based day of the year for a one-based month and day.
#[inline]
pub(crate) const fn days_before(month: u32, day: u32) -> u32 {
    let before_month = if month <= 7 {
        (month - 1) * 31
    } else {
        FIRST_HALF_DAYS + (month - 7) * 30
    };
    before_month + day - 1
}

/// Inverse of [`days_before`]: one-based `(month, day)` for a zero-based ordinal.
#[inline]
pub(crate) const fn month_day(ordinal: u32) -> (u32, u32) {
    if ordinal < FIRST_HALF_DAYS {
        (ordinal / 31 + 1, ordinal % 31 + 1)
    } else {
        let rest = ordinal - FIRST_HALF_DAYS;
        (rest / 30 + 7, rest % 30 + 1)
    }
}

/// Validates a Jalali `(year, month, day)` triple.
pub(crate) fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    check_year(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::out_of_range("Jalali month", month));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(CalendarError::out_of_range(
            "Jalali day",
            format!("{year}/{month}/{day}"),
        ));
    }
    Ok(())
}

/// Gregorian date of a Jalali day.
pub(crate) fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    check_date(year, month, day)?;
    let offset = days_before(month, day);
    farvardin_first(year)?
        .checked_add_days(chrono::Days::new(u64::from(offset)))
        .ok_or_else(|| CalendarError::out_of_range("Jalali date", format!("{year}/{month}/{day}")))
}

/// Jalali `(year, month, day)` of a Gregorian date.
pub(crate) fn gregorian_to_jalali(date: NaiveDate) -> Result<(i32, u32, u32)> {
    let out_of_range = || CalendarError::out_of_range("Gregorian date", date);

    // Farvardin 1 always falls in March, so the Jalali year is either
    // `gregorian - 621` or the one before it.
    let guess = date.year() - 621;
    let year = match farvardin_first(guess) {
        Ok(start) if date >= start => guess,
        _ => guess - 1,
    };
    let start = farvardin_first(year).map_err(|_| out_of_range())?;

    let ordinal = (date - start).num_days();
    if ordinal < 0 || ordinal >= i64::from(days_in_year(year)) {
        return Err(out_of_range());
    }
    let (month, day) = month_day(ordinal as u32);
    Ok((year, month, day))
}
