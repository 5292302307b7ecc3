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

//! Fail-fast validation of instants and calendar fields.
//!
//! Every public operation calls one or more of these before computing anything.

use tracing::debug;

use crate::dates::config::{MAX_MONTH_OFFSET, MAX_YEAR_MILLIS, MAX_YEAR_OFFSET};
use crate::dates::Instant;
use crate::error::{DateError, DateResult};

/// Returns whether a raw numeric time value denotes a date at all, i.e. is not NaN or infinite.
pub fn is_valid_instant(value: f64) -> bool {
    value.is_finite()
}

/// Reject instants before the epoch or at or beyond 3000-01-01T00:00:00Z.
pub fn validate_instant(date: &Instant) -> DateResult<()> {
    let millis = date.millis();
    if !(0..MAX_YEAR_MILLIS).contains(&millis) {
        debug!(millis, "rejected out of range instant");
        return Err(DateError::OutOfRange { millis });
    }
    Ok(())
}

/// Reject calendar years below 1.
pub fn validate_year(year: i32) -> DateResult<()> {
    if year < 1 {
        debug!(year, "rejected year");
        return Err(DateError::InvalidYear { year });
    }
    Ok(())
}

/// Reject one-based calendar months outside 1..=12.
pub fn validate_month(month: i32) -> DateResult<()> {
    if !(1..=12).contains(&month) {
        debug!(month, "rejected month");
        return Err(DateError::InvalidMonth { month });
    }
    Ok(())
}

/// Reject zero-based month indices outside 0..=11.
pub fn validate_month_index(month: i32) -> DateResult<()> {
    if !(0..=11).contains(&month) {
        debug!(month, "rejected month index");
        return Err(DateError::InvalidMonthIndex { month });
    }
    Ok(())
}

/// Reject weekday indices outside 0 (Sunday) ..= 6 (Saturday).
pub fn validate_weekday(weekday: i32) -> DateResult<()> {
    if !(0..=6).contains(&weekday) {
        debug!(weekday, "rejected weekday");
        return Err(DateError::InvalidWeekday { weekday });
    }
    Ok(())
}

/// Reject signed year offsets with a magnitude above [`MAX_YEAR_OFFSET`].
///
/// Negative offsets are valid; they shift backwards.
pub fn validate_year_offset(years: i32) -> DateResult<()> {
    if years.unsigned_abs() > MAX_YEAR_OFFSET.unsigned_abs() {
        debug!(years, "rejected year offset");
        return Err(DateError::InvalidYearOffset {
            years,
            max: MAX_YEAR_OFFSET,
        });
    }
    Ok(())
}

/// Reject signed month offsets with a magnitude above [`MAX_MONTH_OFFSET`].
///
/// Negative offsets are valid; they shift backwards.
pub fn validate_month_offset(months: i32) -> DateResult<()> {
    if months.unsigned_abs() > MAX_MONTH_OFFSET.unsigned_abs() {
        debug!(months, "rejected month offset");
        return Err(DateError::InvalidMonthOffset {
            months,
            max: MAX_MONTH_OFFSET,
        });
    }
    Ok(())
}
