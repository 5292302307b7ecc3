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

use crate::dates::{
    validate_instant, validate_month_offset, validate_year_offset, Instant, LocalCalendar,
};
use crate::error::DateResult;

/// Shift instants by whole local calendar years, months or days.
///
/// Shifting sets the local field to its value plus the signed offset and lets the result roll
/// over into neighbouring months, exactly like writing an out of range field. No clamping to
/// month end takes place, e.g. one month after January 31st 2024 is March 2nd 2024.
pub trait DateShift: LocalCalendar {
    /// Add a signed number of years to the local year.
    fn add_years(&self, date: &Instant, years: i32) -> DateResult<Instant> {
        validate_instant(date)?;
        validate_year_offset(years)?;
        let local = self.local_fields(date)?;
        self.compose(
            i64::from(local.year()) + i64::from(years),
            local.month0().into(),
            local.day().into(),
            local.time(),
        )
    }

    /// Add a signed number of months to the local month.
    fn add_months(&self, date: &Instant, months: i32) -> DateResult<Instant> {
        validate_instant(date)?;
        validate_month_offset(months)?;
        let local = self.local_fields(date)?;
        self.compose(
            local.year().into(),
            i64::from(local.month0()) + i64::from(months),
            local.day().into(),
            local.time(),
        )
    }

    /// Add a signed number of days to the local day of the month.
    fn add_days(&self, date: &Instant, days: i64) -> DateResult<Instant> {
        validate_instant(date)?;
        let local = self.local_fields(date)?;
        self.compose(
            local.year().into(),
            local.month0().into(),
            i64::from(local.day()).saturating_add(days),
            local.time(),
        )
    }

    /// Equivalent to [`add_years`](DateShift::add_years) with the negated offset.
    fn subtract_years(&self, date: &Instant, years: i32) -> DateResult<Instant> {
        validate_instant(date)?;
        validate_year_offset(years)?;
        self.add_years(date, -years)
    }

    /// Equivalent to [`add_months`](DateShift::add_months) with the negated offset.
    fn subtract_months(&self, date: &Instant, months: i32) -> DateResult<Instant> {
        validate_instant(date)?;
        validate_month_offset(months)?;
        self.add_months(date, -months)
    }

    /// Equivalent to [`add_days`](DateShift::add_days) with the negated offset.
    fn subtract_days(&self, date: &Instant, days: i64) -> DateResult<Instant> {
        validate_instant(date)?;
        self.add_days(date, days.saturating_neg())
    }
}

impl<T: LocalCalendar> DateShift for T {}
