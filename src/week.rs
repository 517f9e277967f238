// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Week boundaries under a selectable week-start convention.
//!
//! The offsets are day counts to subtract from (start) or add to (end) a
//! given day to reach the bounds of its week. Only the weekday numbering
//! differs between policies; the dates themselves are plain Gregorian days.

use crate::error::{CalendarError, Result};
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which calendar's week layout to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeekStartPolicy {
    /// Saturday through Friday.
    #[default]
    Jalali,
    /// Monday through Sunday.
    Gregorian,
}

impl WeekStartPolicy {
    /// First day of the week under this policy.
    pub const fn first_day(self) -> Weekday {
        match self {
            WeekStartPolicy::Jalali => Weekday::Sat,
            WeekStartPolicy::Gregorian => Weekday::Mon,
        }
    }

    /// Days from the start of the week to `weekday`.
    pub fn start_of_week_offset(self, weekday: Weekday) -> i64 {
        let g = i64::from(weekday.num_days_from_sunday());
        match self {
            WeekStartPolicy::Jalali if weekday == Weekday::Sat => 0,
            WeekStartPolicy::Jalali => g + 1,
            WeekStartPolicy::Gregorian if weekday == Weekday::Sun => 6,
            WeekStartPolicy::Gregorian => g - 1,
        }
    }

    /// Days from `weekday` to the end of the week.
    pub fn end_of_week_offset(self, weekday: Weekday) -> i64 {
        6 - self.start_of_week_offset(weekday)
    }

    /// Inclusive `(first, last)` days of the week containing `date`.
    pub fn week_bounds(self, date: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let weekday = date.weekday();
        Ok((
            shift_days(date, -self.start_of_week_offset(weekday))?,
            shift_days(date, self.end_of_week_offset(weekday))?,
        ))
    }
}

/// See [`WeekStartPolicy::start_of_week_offset`].
pub fn start_of_week_offset(policy: WeekStartPolicy, weekday: Weekday) -> i64 {
    policy.start_of_week_offset(weekday)
}

/// See [`WeekStartPolicy::end_of_week_offset`].
pub fn end_of_week_offset(policy: WeekStartPolicy, weekday: Weekday) -> i64 {
    policy.end_of_week_offset(weekday)
}

/// `date` moved by a signed number of days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or_else(|| CalendarError::out_of_range("Gregorian date", date))
}

impl fmt::Display for WeekStartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeekStartPolicy::Jalali => "jalali",
            WeekStartPolicy::Gregorian => "gregorian",
        })
    }
}

impl FromStr for WeekStartPolicy {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jalali" | "persian" => Ok(WeekStartPolicy::Jalali),
            "gregorian" => Ok(WeekStartPolicy::Gregorian),
            _ => Err(CalendarError::format(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    #[test]
    fn jalali_table() {
        let p = WeekStartPolicy::Jalali;
        assert_eq!(p.start_of_week_offset(Weekday::Sat), 0);
        assert_eq!(p.start_of_week_offset(Weekday::Sun), 1);
        assert_eq!(p.start_of_week_offset(Weekday::Wed), 4);
        assert_eq!(p.start_of_week_offset(Weekday::Fri), 6);
        assert_eq!(p.end_of_week_offset(Weekday::Fri), 0);
    }

    #[test]
    fn gregorian_table() {
        let p = WeekStartPolicy::Gregorian;
        assert_eq!(p.start_of_week_offset(Weekday::Mon), 0);
        assert_eq!(p.start_of_week_offset(Weekday::Wed), 2);
        assert_eq!(p.start_of_week_offset(Weekday::Sat), 5);
        assert_eq!(p.start_of_week_offset(Weekday::Sun), 6);
        assert_eq!(p.end_of_week_offset(Weekday::Sun), 0);
    }

    #[test]
    fn offsets_cover_a_week() {
        for policy in [WeekStartPolicy::Jalali, WeekStartPolicy::Gregorian] {
            let mut starts: Vec<i64> = WEEK
                .iter()
                .map(|&d| start_of_week_offset(policy, d))
                .collect();
            for &d in &WEEK {
                assert_eq!(
                    start_of_week_offset(policy, d) + end_of_week_offset(policy, d),
                    6
                );
            }
            starts.sort_unstable();
            assert_eq!(starts, (0..7).collect::<Vec<i64>>());
            assert_eq!(policy.start_of_week_offset(policy.first_day()), 0);
        }
    }

    #[test]
    fn bounds_around_a_wednesday() {
        let wed = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let (from, to) = WeekStartPolicy::Jalali.week_bounds(wed).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 3, 22).unwrap());
        assert_eq!(from.weekday(), Weekday::Sat);

        let (from, to) = WeekStartPolicy::Gregorian.week_bounds(wed).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 3, 24).unwrap());
    }

    #[test]
    fn bounds_fail_at_chrono_limits() {
        // The two policies start on different days, so at least one of them
        // needs a day before `NaiveDate::MIN`.
        let policies = [WeekStartPolicy::Jalali, WeekStartPolicy::Gregorian];
        assert!(policies.iter().any(|p| p.week_bounds(NaiveDate::MIN).is_err()));
    }

    #[test]
    fn policy_names() {
        assert_eq!(
            "Persian".parse::<WeekStartPolicy>().unwrap(),
            WeekStartPolicy::Jalali
        );
        assert_eq!(
            " gregorian ".parse::<WeekStartPolicy>().unwrap(),
            WeekStartPolicy::Gregorian
        );
        assert!("iso".parse::<WeekStartPolicy>().unwrap_err().is_format());
        assert_eq!(WeekStartPolicy::Gregorian.to_string(), "gregorian");
    }
}
