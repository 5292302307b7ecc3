// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

//! Error types for all fallible date operations.

use chrono::NaiveDateTime;

/// Convenience alias for results returned throughout the crate.
pub type DateResult<T> = Result<T, DateError>;

/// Error type for every fallible operation in *datekit*.
///
/// Validation errors are always returned before any computation takes place with the
/// offending value, so no partially computed result is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// The raw time value is not a number.
    #[error("invalid date: time value is not a number")]
    InvalidInstant,

    /// The instant lies before the epoch or at or beyond the year 3000.
    #[error("date out of range: {millis} ms (must be within 1970-01-01 and the year 3000)")]
    OutOfRange {
        /// Milliseconds since the epoch of the rejected instant.
        millis: i64,
    },

    /// A calendar year below 1.
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear { year: i32 },

    /// A one-based calendar month outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: i32 },

    /// A zero-based month index outside 0..=11.
    #[error("invalid month index: {month} (must be 0..=11)")]
    InvalidMonthIndex { month: i32 },

    /// A weekday index outside 0 (Sunday) ..= 6 (Saturday).
    #[error("invalid weekday: {weekday} (must be 0..=6)")]
    InvalidWeekday { weekday: i32 },

    /// A signed year offset whose magnitude is too large to shift by.
    #[error("invalid year offset: {years} (magnitude must be <= {max})")]
    InvalidYearOffset { years: i32, max: i32 },

    /// A signed month offset whose magnitude is too large to shift by.
    #[error("invalid month offset: {months} (magnitude must be <= {max})")]
    InvalidMonthOffset { months: i32, max: i32 },

    /// A range whose `start` lies after its `end`.
    #[error("invalid range: start ({start} ms) is after end ({end} ms)")]
    InvalidRange { start: i64, end: i64 },

    /// A time zone identifier not found in the IANA database.
    #[error("invalid time zone: `{name}`")]
    InvalidTimeZone { name: String },

    /// A locale tag with no available locale data.
    #[error("invalid locale: `{locale}`")]
    InvalidLocale { locale: String },

    /// A formatting pattern that could not be rendered.
    #[error("invalid format pattern: `{pattern}`")]
    InvalidFormat { pattern: String },

    /// A local wall-clock time that cannot be mapped to an instant in the zone.
    #[error("local time {local} does not exist in the time zone")]
    NonexistentLocalTime { local: NaiveDateTime },

    /// Calendar arithmetic left the range representable by the date engine.
    #[error("date arithmetic overflowed the supported range")]
    Overflow,

    /// A date string could not be parsed.
    #[error("could not parse date: {0}")]
    Parse(String),

    /// A value could not be converted to or from JSON.
    #[error("json error: {0}")]
    Json(String),
}
