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

use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates::is_valid_instant;
use crate::error::{DateError, DateResult};

/// Largest magnitude of a time value, in milliseconds, that can be held by an [`Instant`]
/// built from a raw numeric value (±100,000,000 days around the epoch).
const MAX_TIME_VALUE: f64 = 8.64e15;

/// An immutable point in time with millisecond resolution.
///
/// The value is the signed number of milliseconds since 1970-01-01T00:00:00Z in the proleptic
/// Gregorian calendar. No bounds are imposed by the type itself; operations enforce them via
/// [`validate_instant`](crate::dates::validate_instant) before computing anything.
///
/// Every operation that "modifies" a date returns a new `Instant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// Create an instant from milliseconds since the epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Instant { millis }
    }

    /// Create an instant from a raw numeric time value.
    ///
    /// Fractional milliseconds are truncated toward zero. Not-a-number, infinite and values
    /// beyond ±8.64e15 ms are rejected with [`DateError::InvalidInstant`].
    pub fn try_from_time_value(value: f64) -> DateResult<Self> {
        if !is_valid_instant(value) || value.abs() > MAX_TIME_VALUE {
            return Err(DateError::InvalidInstant);
        }
        Ok(Instant::from_millis(value.trunc() as i64))
    }

    /// The current instant, sampled from the host clock.
    pub fn now() -> Self {
        Instant::from_datetime(&Utc::now())
    }

    /// Create an instant from any zoned `chrono` date-time.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Instant::from_millis(dt.timestamp_millis())
    }

    /// Milliseconds since the epoch.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Convert to a UTC `chrono` date-time.
    ///
    /// Fails with [`DateError::OutOfRange`] only for values beyond the range `chrono` can
    /// represent, which never happens for an instant that passed validation.
    pub fn to_utc(&self) -> DateResult<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis).ok_or(DateError::OutOfRange {
            millis: self.millis,
        })
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(item: DateTime<Tz>) -> Self {
        Instant::from_datetime(&item)
    }
}

impl FromStr for Instant {
    type Err = DateError;

    /// Parse an RFC 3339 string, e.g. `2024-10-15T12:00:00.000Z` or `2024-10-15T21:00:00+09:00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Instant::from_datetime(&dt))
            .map_err(|e| DateError::Parse(format!("`{}`: {}", s, e)))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "Instant({} ms)", self.millis),
        }
    }
}

/// Create an [`Instant`] at UTC midnight of the given date.
///
/// Panics if date values are invalid.
pub fn ymd(year: i32, month: u32, day: u32) -> Instant {
    ymd_hms(year, month, day, 0, 0, 0)
}

/// Create an [`Instant`] at the given UTC date and time.
///
/// Panics if date or time values are invalid.
pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Instant {
    let ndt = NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(hour, min, sec)
        .expect("`hour`, `min`, `sec` are invalid.");
    Instant::from_datetime(&Utc.from_utc_datetime(&ndt))
}
