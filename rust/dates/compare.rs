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

use crate::dates::accessors::{utc_date, utc_full_year, utc_month_index};
use crate::dates::{validate_instant, Instant};
use crate::error::DateResult;

/// Returns whether `a` and `b` fall on the same UTC calendar date.
pub fn same_day(a: &Instant, b: &Instant) -> DateResult<bool> {
    validate_instant(a)?;
    validate_instant(b)?;
    Ok(utc_full_year(a)? == utc_full_year(b)?
        && utc_month_index(a)? == utc_month_index(b)?
        && utc_date(a)? == utc_date(b)?)
}

/// Returns whether `a` is strictly earlier than `b`.
pub fn before(a: &Instant, b: &Instant) -> DateResult<bool> {
    validate_instant(a)?;
    validate_instant(b)?;
    Ok(a.millis() < b.millis())
}

/// Returns whether `a` is strictly later than `b`.
pub fn after(a: &Instant, b: &Instant) -> DateResult<bool> {
    validate_instant(a)?;
    validate_instant(b)?;
    Ok(a.millis() > b.millis())
}
