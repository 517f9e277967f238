// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text parsing and formatting of [`JalaliDate`].
//!
//! Accepted input is anything containing `1YYY<sep>M[M]<sep>D[D]` where
//! `<sep>` is `-` or `/`. The match is not anchored, so surrounding text is
//! ignored: `"due 1397/5/12 noon"` parses as 1397/5/12.

use crate::date::JalaliDate;
use crate::error::{CalendarError, Result};
use log::trace;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static JALALI_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1([0-9]{3})[-/]([0-9]{1,2})[-/]([0-9]{1,2})").expect("Invalid regex pattern")
});

/// Named output layouts understood by [`JalaliDate::format`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `"{weekday} {day} {month name} {year}"`, mode `"wdmy"`.
    WeekdayDayMonthYear,
    /// `"{day} {month name} {year}"`, mode `"dmy"`.
    DayMonthYear,
    /// `"{day} {month name} {year} ({weekday})"`, mode `"dmyw"`.
    DayMonthYearWeekday,
    /// `"{year}/{month}/{day}"`, the fallback for any other mode.
    #[default]
    Short,
}

impl DateFormat {
    /// Resolve a mode string; unknown modes select [`DateFormat::Short`].
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "wdmy" => DateFormat::WeekdayDayMonthYear,
            "dmy" => DateFormat::DayMonthYear,
            "dmyw" => DateFormat::DayMonthYearWeekday,
            _ => DateFormat::Short,
        }
    }
}

impl From<&str> for DateFormat {
    fn from(mode: &str) -> Self {
        DateFormat::from_mode(mode)
    }
}

fn reject(text: &str) -> CalendarError {
    trace!("rejected Jalali date text {text:?}");
    CalendarError::format(text)
}

/// Parse the first Jalali date found in `text`.
///
/// Fails with [`CalendarError::Format`] when nothing matches, when the month
/// exceeds 12, the day exceeds 31, the day exceeds 30 in months 7–12, a field
/// is zero, or the day does not exist in that year (Esfand 30 of a common
/// year).
pub fn parse(text: &str) -> Result<JalaliDate> {
    let caps = JALALI_DATE.captures(text).ok_or_else(|| reject(text))?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let (Some(digits), Some(month), Some(day)) = (field(1), field(2), field(3)) else {
        return Err(reject(text));
    };

    let year = 1000 + digits as i32;
    if month > 12 || day > 31 || (month > 6 && day > 30) {
        return Err(reject(text));
    }
    JalaliDate::new(year, month, day).map_err(|_| reject(text))
}

/// Like [`parse`], reporting failure as `None`.
pub fn try_parse(text: &str) -> Option<JalaliDate> {
    parse(text).ok()
}

impl JalaliDate {
    /// See [`parse`](crate::parse).
    pub fn parse(text: &str) -> Result<Self> {
        parse(text)
    }

    /// See [`try_parse`](crate::try_parse).
    pub fn try_parse(text: &str) -> Option<Self> {
        try_parse(text)
    }

    /// `"{year}/{month}/{day}"` without zero padding.
    pub fn to_short_date_string(&self) -> String {
        format!("{}/{}/{}", self.year(), self.month(), self.day())
    }

    /// Render with a named mode: `"wdmy"`, `"dmy"` or `"dmyw"`. Any other
    /// mode yields the short form.
    pub fn format(&self, mode: &str) -> String {
        self.format_as(DateFormat::from_mode(mode))
    }

    /// Render with an explicit [`DateFormat`].
    pub fn format_as(&self, layout: DateFormat) -> String {
        match layout {
            DateFormat::WeekdayDayMonthYear => format!(
                "{} {} {} {}",
                self.weekday_name(),
                self.day(),
                self.month_name(),
                self.year()
            ),
            DateFormat::DayMonthYear => {
                format!("{} {} {}", self.day(), self.month_name(), self.year())
            }
            DateFormat::DayMonthYearWeekday => format!(
                "{} {} {} ({})",
                self.day(),
                self.month_name(),
                self.year(),
                self.weekday_name()
            ),
            DateFormat::Short => self.to_short_date_string(),
        }
    }

    /// Adapter implementing [`fmt::Display`] with the given layout.
    pub fn display_as(&self, layout: DateFormat) -> impl fmt::Display + '_ {
        struct Formatted<'a>(&'a JalaliDate, DateFormat);

        impl fmt::Display for Formatted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.format_as(self.1))
            }
        }

        Formatted(self, layout)
    }
}

impl FromStr for JalaliDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
