// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Jalali Calendar Views
//!
//! Conversion between the Jalali (solar Hijri, Persian) calendar and the
//! Gregorian calendar, plus the month, week and relative date ranges built on
//! top of it.
//!
//! # Core types
//!
//! - [`JalaliDate`]: validated Jalali day with an optional time of day.
//! - [`DateFormat`]: the named text layouts (`"wdmy"`, `"dmy"`, `"dmyw"`).
//! - [`WeekStartPolicy`]: Saturday-first (Jalali) or Monday-first (Gregorian) weeks.
//! - [`DateRangeView`]: a titled, inclusive range of Gregorian days.
//! - [`RelativeViews`]: the ordered catalog of ranges relative to one moment.
//! - [`CalendarError`]: `Format` and `OutOfRange` failures.
//!
//! # Operations
//!
//! | Concern | Entry points |
//! |---------|--------------|
//! | Conversion | [`JalaliDate::from_gregorian`], [`JalaliDate::to_gregorian`] |
//! | Leap rule | [`is_leap_year`], [`is_leap_day`], [`days_in_month`] |
//! | Text | [`parse`], [`try_parse`], [`JalaliDate::to_short_date_string`], [`JalaliDate::format`] |
//! | Months | [`start_of_month`], [`end_of_month`], [`month_range`] |
//! | Weeks | [`start_of_week_offset`], [`end_of_week_offset`], [`WeekStartPolicy::week_bounds`] |
//! | Views | [`build_relative_views`] |
//!
//! # Supported span
//!
//! Jalali years [`MIN_YEAR`]`..=`[`MAX_YEAR`] (Gregorian `0622-03-22` to
//! `3799-03-19`). The leap cycle is documented in [`arithmetic`].
//!
//! ```
//! use chrono::NaiveDate;
//! use jalali_views::{build_relative_views, JalaliDate, WeekStartPolicy};
//!
//! let nowruz = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let jalali = JalaliDate::from_date(nowruz).unwrap();
//! assert_eq!(jalali.to_short_date_string(), "1403/1/1");
//!
//! let views = build_relative_views(nowruz.and_hms_opt(9, 0, 0).unwrap(), WeekStartPolicy::Jalali)
//!     .unwrap();
//! assert_eq!(views.get("This Month").unwrap().from_date(), nowruz);
//! ```

pub mod arithmetic;
mod date;
mod error;
mod month;
mod text;
mod view;
mod week;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use arithmetic::{days_in_month, days_in_year, farvardin_first, is_leap_year, MAX_YEAR, MIN_YEAR};
pub use date::{is_leap_day, jalali_weekday_number, JalaliDate, MONTH_NAMES, WEEKDAY_NAMES};
pub use error::{CalendarError, Result};
pub use month::{end_of_month, month_range, start_of_month};
pub use text::{parse, try_parse, DateFormat};
pub use view::{
    build_relative_views, last_months_title, DateRangeView, RelativeViews, ALL_ENTRIES, LAST_MONTH,
    LAST_WEEK, THIS_MONTH, THIS_WEEK, TODAY, TRAILING_MONTHS,
};
pub use week::{end_of_week_offset, start_of_week_offset, WeekStartPolicy};
