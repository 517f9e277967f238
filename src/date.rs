// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Jalali date value type and Gregorian conversion.
//!
//! [`JalaliDate`] is a validated `(year, month, day)` triple plus an optional
//! time of day. Every constructor checks the triple against the leap rule in
//! [`arithmetic`](crate::arithmetic), so a `JalaliDate` always denotes a day
//! that exists. The weekday is resolved once, at construction.
//!
//! Gregorian values are naive `chrono` types; no time zone is involved.

use crate::arithmetic;
use crate::error::{CalendarError, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Weekday};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Saturday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنج شنبه",
    "جمعه",
];

/// Jalali weekday number (1 = Saturday … 7 = Friday) of a Gregorian weekday.
#[inline]
pub fn jalali_weekday_number(weekday: Weekday) -> u32 {
    let g = weekday.num_days_from_sunday();
    if g < 6 {
        g + 2
    } else {
        g - 5
    }
}

/// `true` iff the date is Esfand 30 of a leap year.
pub fn is_leap_day(year: i32, month: u32, day: u32) -> bool {
    month == 12 && day == 30 && arithmetic::is_leap_year(year)
}

/// A day in the Jalali (solar Hijri) calendar, with an optional time of day.
///
/// Ordering is chronological.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "JalaliFields", into = "JalaliFields")
)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    weekday: Weekday,
}

impl JalaliDate {
    // ── constructors ──────────────────────────────────────────────────

    /// Create a date at midnight.
    ///
    /// Fails with [`CalendarError::OutOfRange`] when the year is outside the
    /// supported span or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let gregorian = arithmetic::jalali_to_gregorian(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            weekday: gregorian.weekday(),
        })
    }

    /// Attach a time of day.
    pub fn with_time(self, hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(CalendarError::out_of_range("hour", hour));
        }
        if minute > 59 {
            return Err(CalendarError::out_of_range("minute", minute));
        }
        Ok(Self {
            hour,
            minute,
            ..self
        })
    }

    /// Current local wall-clock time in the Jalali calendar.
    pub fn now() -> Result<Self> {
        Self::from_gregorian(Local::now().naive_local())
    }

    // ── Gregorian conversion ──────────────────────────────────────────

    /// Convert a Gregorian moment. Hour and minute are carried through,
    /// seconds are dropped.
    pub fn from_gregorian(moment: NaiveDateTime) -> Result<Self> {
        Self::from_date(moment.date())?.with_time(moment.hour(), moment.minute())
    }

    /// Convert a Gregorian calendar day.
    pub fn from_date(date: NaiveDate) -> Result<Self> {
        let (year, month, day) = arithmetic::gregorian_to_jalali(date)?;
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            weekday: date.weekday(),
        })
    }

    /// Gregorian moment of this date and time, seconds zeroed.
    pub fn to_gregorian(&self) -> Result<NaiveDateTime> {
        let date = self.to_gregorian_date()?;
        date.and_hms_opt(self.hour, self.minute, 0)
            .ok_or_else(|| CalendarError::out_of_range("time of day", self.time_label()))
    }

    /// Gregorian calendar day of this date.
    pub fn to_gregorian_date(&self) -> Result<NaiveDate> {
        arithmetic::jalali_to_gregorian(self.year, self.month, self.day)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Day of week as a `chrono` weekday.
    #[inline]
    pub const fn chrono_weekday(&self) -> Weekday {
        self.weekday
    }

    /// Jalali weekday number, 1 (Saturday) through 7 (Friday).
    #[inline]
    pub fn weekday(&self) -> u32 {
        jalali_weekday_number(self.weekday)
    }

    /// Persian name of the month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Persian name of the day of week.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[(self.weekday() - 1) as usize]
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        arithmetic::days_in_month(self.year, self.month)
    }

    /// One-based day of the year.
    pub fn ordinal(&self) -> u32 {
        arithmetic::days_before(self.month, self.day) + 1
    }

    /// `true` iff this is Esfand 30 of a leap year.
    pub fn is_leap_day(&self) -> bool {
        is_leap_day(self.year, self.month, self.day)
    }

    fn time_label(&self) -> String {
        format!("{}:{}", self.hour, self.minute)
    }
}

impl Ord for JalaliDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day, self.hour, self.minute).cmp(&(
            other.year,
            other.month,
            other.day,
            other.hour,
            other.minute,
        ))
    }
}

impl PartialOrd for JalaliDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ساعت {}",
            self.weekday_name(),
            self.day,
            self.month_name(),
            self.year,
            self.time_label()
        )
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_date(date)
    }
}

impl TryFrom<NaiveDateTime> for JalaliDate {
    type Error = CalendarError;

    fn try_from(moment: NaiveDateTime) -> Result<Self> {
        Self::from_gregorian(moment)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Wire shape of [`JalaliDate`]; deserialisation re-validates the day.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct JalaliFields {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<JalaliFields> for JalaliDate {
    type Error = CalendarError;

    fn try_from(raw: JalaliFields) -> Result<Self> {
        JalaliDate::new(raw.year, raw.month, raw.day)?.with_time(raw.hour, raw.minute)
    }
}

#[cfg(feature = "serde")]
impl From<JalaliDate> for JalaliFields {
    fn from(date: JalaliDate) -> Self {
        JalaliFields {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: date.hour,
            minute: date.minute,
        }
    }
}
