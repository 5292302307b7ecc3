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

//! UTC field accessors.
//!
//! Local fields are read through a [`LocalCalendar`](crate::dates::LocalCalendar).

use chrono::prelude::*;

use crate::dates::{validate_instant, Instant};
use crate::error::DateResult;

fn utc_fields(date: &Instant) -> DateResult<DateTime<Utc>> {
    validate_instant(date)?;
    date.to_utc()
}

/// Milliseconds since the epoch.
pub fn get_time(date: &Instant) -> DateResult<i64> {
    validate_instant(date)?;
    Ok(date.millis())
}

/// The UTC calendar year.
pub fn utc_full_year(date: &Instant) -> DateResult<i32> {
    Ok(utc_fields(date)?.year())
}

/// The zero-based UTC month, 0 (January) ..= 11 (December).
pub fn utc_month_index(date: &Instant) -> DateResult<u32> {
    Ok(utc_fields(date)?.month0())
}

/// The UTC day of the month, 1 ..= 31.
pub fn utc_date(date: &Instant) -> DateResult<u32> {
    Ok(utc_fields(date)?.day())
}

/// The UTC day of the week, 0 (Sunday) ..= 6 (Saturday).
pub fn utc_weekday(date: &Instant) -> DateResult<u32> {
    Ok(utc_fields(date)?.weekday().num_days_from_sunday())
}
