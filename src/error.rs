// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for calendar operations.
//!
//! Only two kinds of failure exist:
//!
//! - [`CalendarError::Format`]: text is not a Jalali date, or encodes a day
//!   that cannot exist.
//! - [`CalendarError::OutOfRange`]: a year, month, or resulting date lies
//!   outside the supported calendar span.

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Error type for calendar conversion, parsing and range computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("string does not represent a valid Jalali date value: {input:?}")]
    Format { input: String },

    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: String },
}

impl CalendarError {
    pub(crate) fn format(input: impl Into<String>) -> Self {
        CalendarError::Format {
            input: input.into(),
        }
    }

    pub(crate) fn out_of_range(what: &'static str, value: impl ToString) -> Self {
        CalendarError::OutOfRange {
            what,
            value: value.to_string(),
        }
    }

    /// `true` for [`CalendarError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, CalendarError::Format { .. })
    }

    /// `true` for [`CalendarError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CalendarError::OutOfRange { .. })
    }
}
