// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named date-range views relative to a given moment.
//!
//! This module provides:
//! - [`DateRangeView`]: a titled, inclusive `[from, to]` range of days
//! - [`RelativeViews`]: the fixed, ordered catalog built from one "now"
//!
//! The catalog is built explicitly by the caller (usually once at start-up)
//! and is immutable afterwards; share it by reference or `Arc`.

use crate::arithmetic;
use crate::date::JalaliDate;
use crate::error::Result;
use crate::month::{end_of_month, start_of_month};
use crate::week::{shift_days, WeekStartPolicy};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use log::{debug, trace};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const ALL_ENTRIES: &str = "All Entries";
pub const TODAY: &str = "Today";
pub const THIS_WEEK: &str = "This Week";
pub const LAST_WEEK: &str = "Last Week";
pub const THIS_MONTH: &str = "This Month";
pub const LAST_MONTH: &str = "Last Month";

/// Month counts of the trailing "Last N Months" views, in display order.
pub const TRAILING_MONTHS: [u32; 3] = [3, 6, 9];

/// A titled, inclusive range of calendar days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use jalali_views::DateRangeView;
///
/// let from = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
/// let week = DateRangeView::new("This Week", from, to);
///
/// assert!(week.contains(to));
/// assert_eq!(week.duration_days(), qtty::Days::new(7.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRangeView {
    title: String,
    from_date: NaiveDate,
    to_date: NaiveDate,
}

impl DateRangeView {
    /// Creates a view over `[from_date, to_date]`.
    pub fn new(title: impl Into<String>, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            from_date,
            to_date,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to_date
    }

    /// `true` when `date` lies within the range, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from_date <= date && date <= self.to_date
    }

    /// Keeps the items whose day, as extracted by `date_of`, is in range.
    pub fn select<T, I, F>(&self, items: I, date_of: F) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> NaiveDate,
    {
        items
            .into_iter()
            .filter(|item| self.contains(date_of(item)))
            .collect()
    }

    /// Number of days covered, both ends included. Empty ranges give zero.
    pub fn duration_days(&self) -> Days {
        let span = (self.to_date - self.from_date).num_days() + 1;
        Days::new(span.max(0) as f64)
    }
}

impl fmt::Display for DateRangeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// The ordered catalog of relative views.
///
/// Order is fixed and is the display order: all entries, today, this week,
/// last week, this month, last month, then the trailing 3, 6 and 9 months.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelativeViews {
    anchor: NaiveDateTime,
    policy: WeekStartPolicy,
    views: Vec<DateRangeView>,
}

impl RelativeViews {
    /// Builds the catalog anchored at `now`.
    ///
    /// Fails with [`CalendarError::OutOfRange`](crate::CalendarError::OutOfRange)
    /// when `now`, or a month it refers back to, is outside the Jalali span.
    pub fn build(now: NaiveDateTime, policy: WeekStartPolicy) -> Result<Self> {
        debug!("building relative views anchored at {now} ({policy} weeks)");
        let today = now.date();
        let jalali_now = JalaliDate::from_gregorian(now)?;

        let mut views = vec![
            DateRangeView::new(ALL_ENTRIES, NaiveDate::MIN, NaiveDate::MAX),
            DateRangeView::new(TODAY, today, today),
            this_week(today, policy)?,
            last_week(today, policy)?,
            this_month(&jalali_now)?,
            last_month(&jalali_now)?,
        ];
        for count in TRAILING_MONTHS {
            views.push(last_months(&jalali_now, today, count)?);
        }

        for view in &views {
            trace!("{view}: {} ..= {}", view.from_date, view.to_date);
        }
        Ok(Self {
            anchor: now,
            policy,
            views,
        })
    }

    /// Builds the catalog from the local wall clock.
    pub fn now(policy: WeekStartPolicy) -> Result<Self> {
        Self::build(Local::now().naive_local(), policy)
    }

    /// The moment the catalog was built for.
    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    pub fn policy(&self) -> WeekStartPolicy {
        self.policy
    }

    /// Looks a view up by its title.
    pub fn get(&self, title: &str) -> Option<&DateRangeView> {
        self.views.iter().find(|view| view.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateRangeView> {
        self.views.iter()
    }

    pub fn as_slice(&self) -> &[DateRangeView] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<'a> IntoIterator for &'a RelativeViews {
    type Item = &'a DateRangeView;
    type IntoIter = std::slice::Iter<'a, DateRangeView>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.iter()
    }
}

/// Builds the relative-view catalog for `now`. See [`RelativeViews::build`].
pub fn build_relative_views(now: NaiveDateTime, policy: WeekStartPolicy) -> Result<RelativeViews> {
    RelativeViews::build(now, policy)
}

/// Title of the trailing view covering `count` months.
pub fn last_months_title(count: u32) -> String {
    format!("Last {count} Months")
}

fn this_week(today: NaiveDate, policy: WeekStartPolicy) -> Result<DateRangeView> {
    let (from, to) = policy.week_bounds(today)?;
    Ok(DateRangeView::new(THIS_WEEK, from, to))
}

fn last_week(today: NaiveDate, policy: WeekStartPolicy) -> Result<DateRangeView> {
    let start = policy.start_of_week_offset(today.weekday());
    Ok(DateRangeView::new(
        LAST_WEEK,
        shift_days(today, -(7 + start))?,
        shift_days(today, -(1 + start))?,
    ))
}

fn this_month(now: &JalaliDate) -> Result<DateRangeView> {
    Ok(DateRangeView::new(
        THIS_MONTH,
        start_of_month(now.month(), Some(now.year()))?,
        end_of_month(now.month(), Some(now.year()))?,
    ))
}

fn last_month(now: &JalaliDate) -> Result<DateRangeView> {
    let (year, month) = if now.month() > 1 {
        (now.year(), now.month() - 1)
    } else {
        (now.year() - 1, 12)
    };
    Ok(DateRangeView::new(
        LAST_MONTH,
        start_of_month(month, Some(year))?,
        end_of_month(month, Some(year))?,
    ))
}

/// From the same day `count` months back (clamped to that month's length)
/// through today.
fn last_months(now: &JalaliDate, today: NaiveDate, count: u32) -> Result<DateRangeView> {
    let (year, month) = if now.month() > count {
        (now.year(), now.month() - count)
    } else {
        (now.year() - 1, now.month() + 12 - count)
    };
    let day = now.day().min(arithmetic::days_in_month(year, month));
    let from = JalaliDate::new(year, month, day)?.to_gregorian_date()?;
    Ok(DateRangeView::new(last_months_title(count), from, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at_noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        ymd(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn range(views: &RelativeViews, title: &str) -> (NaiveDate, NaiveDate) {
        let view = views.get(title).expect(title);
        (view.from_date(), view.to_date())
    }

    #[test]
    fn catalog_order_is_fixed() {
        let views = RelativeViews::build(at_noon(2024, 3, 20), WeekStartPolicy::Jalali).unwrap();
        let titles: Vec<&str> = views.iter().map(DateRangeView::title).collect();
        assert_eq!(
            titles,
            vec![
                "All Entries",
                "Today",
                "This Week",
                "Last Week",
                "This Month",
                "Last Month",
                "Last 3 Months",
                "Last 6 Months",
                "Last 9 Months",
            ]
        );
        assert_eq!(views.len(), 9);
        assert_eq!(views.anchor(), at_noon(2024, 3, 20));
    }

    #[test]
    fn nowruz_1403_ranges() {
        let views = RelativeViews::build(at_noon(2024, 3, 20), WeekStartPolicy::Jalali).unwrap();
        assert_eq!(range(&views, ALL_ENTRIES), (NaiveDate::MIN, NaiveDate::MAX));
        assert_eq!(range(&views, TODAY), (ymd(2024, 3, 20), ymd(2024, 3, 20)));
        assert_eq!(range(&views, THIS_WEEK), (ymd(2024, 3, 16), ymd(2024, 3, 22)));
        assert_eq!(range(&views, LAST_WEEK), (ymd(2024, 3, 9), ymd(2024, 3, 15)));
        assert_eq!(range(&views, THIS_MONTH), (ymd(2024, 3, 20), ymd(2024, 4, 19)));
        // Farvardin wraps back to Esfand 1402, a 29-day month.
        assert_eq!(range(&views, LAST_MONTH), (ymd(2024, 2, 20), ymd(2024, 3, 19)));
        assert_eq!(
            range(&views, "Last 3 Months"),
            (ymd(2023, 12, 22), ymd(2024, 3, 20))
        );
        assert_eq!(
            range(&views, "Last 6 Months"),
            (ymd(2023, 9, 23), ymd(2024, 3, 20))
        );
        assert_eq!(
            range(&views, "Last 9 Months"),
            (ymd(2023, 6, 22), ymd(2024, 3, 20))
        );
    }

    #[test]
    fn gregorian_policy_moves_week_bounds_only() {
        let jalali = RelativeViews::build(at_noon(2024, 3, 20), WeekStartPolicy::Jalali).unwrap();
        let views =
            RelativeViews::build(at_noon(2024, 3, 20), WeekStartPolicy::Gregorian).unwrap();
        assert_eq!(range(&views, THIS_WEEK), (ymd(2024, 3, 18), ymd(2024, 3, 24)));
        assert_eq!(range(&views, LAST_WEEK), (ymd(2024, 3, 11), ymd(2024, 3, 17)));
        assert_eq!(range(&views, THIS_MONTH), range(&jalali, THIS_MONTH));
        assert_eq!(views.policy(), WeekStartPolicy::Gregorian);
    }

    #[test]
    fn trailing_months_clamp_day() {
        // 1403/01/31 → 1402/10/31 does not exist, Dey has 30 days.
        let views = RelativeViews::build(at_noon(2024, 4, 19), WeekStartPolicy::Jalali).unwrap();
        assert_eq!(range(&views, "Last 3 Months").0, ymd(2024, 1, 20));

        // 1403/03/30 → Esfand 1402 is common, clamp to 29.
        let views = RelativeViews::build(at_noon(2024, 6, 19), WeekStartPolicy::Jalali).unwrap();
        assert_eq!(range(&views, "Last 3 Months").0, ymd(2024, 3, 19));

        // 1404/03/30 → Esfand 1403 is leap, day 30 survives.
        let views = RelativeViews::build(at_noon(2025, 6, 20), WeekStartPolicy::Jalali).unwrap();
        assert_eq!(range(&views, "Last 3 Months").0, ymd(2025, 3, 20));
    }

    #[test]
    fn view_contains_both_ends() {
        let view = DateRangeView::new("x", ymd(2024, 3, 16), ymd(2024, 3, 22));
        assert!(view.contains(ymd(2024, 3, 16)));
        assert!(view.contains(ymd(2024, 3, 22)));
        assert!(!view.contains(ymd(2024, 3, 15)));
        assert!(!view.contains(ymd(2024, 3, 23)));
        assert_eq!(view.to_string(), "x");
    }

    #[test]
    fn select_filters_records() {
        let view = DateRangeView::new("x", ymd(2024, 3, 16), ymd(2024, 3, 22));
        let records = vec![
            ("a", ymd(2024, 3, 15)),
            ("b", ymd(2024, 3, 16)),
            ("c", ymd(2024, 3, 22)),
            ("d", ymd(2024, 3, 23)),
        ];
        let kept = view.select(records, |(_, date)| *date);
        assert_eq!(kept, vec![("b", ymd(2024, 3, 16)), ("c", ymd(2024, 3, 22))]);
    }

    #[test]
    fn duration_is_inclusive() {
        let day = DateRangeView::new("d", ymd(2024, 3, 20), ymd(2024, 3, 20));
        assert_eq!(day.duration_days(), Days::new(1.0));
        let empty = DateRangeView::new("e", ymd(2024, 3, 21), ymd(2024, 3, 20));
        assert_eq!(empty.duration_days(), Days::new(0.0));
    }

    #[test]
    fn out_of_span_anchor_fails() {
        let err = RelativeViews::build(at_noon(600, 1, 1), WeekStartPolicy::Jalali).unwrap_err();
        assert!(err.is_out_of_range());
    }
}
