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

//! Zone independent Gregorian calendar math.

use chrono::prelude::*;
use chrono::TimeDelta;
use itertools::Itertools;

use crate::dates::{validate_month_index, validate_year};
use crate::error::{DateError, DateResult};

/// Build a date from a year, a zero-based month index and a one-based day, letting the month
/// and day overflow into neighbouring months and years.
pub(crate) fn compose_date(year: i64, month_index: i64, day: i64) -> DateResult<NaiveDate> {
    let year = year
        .checked_add(month_index.div_euclid(12))
        .ok_or(DateError::Overflow)?;
    let year = i32::try_from(year).map_err(|_| DateError::Overflow)?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(DateError::Overflow)?;
    let delta = day
        .checked_sub(1)
        .and_then(TimeDelta::try_days)
        .ok_or(DateError::Overflow)?;
    first.checked_add_signed(delta).ok_or(DateError::Overflow)
}

/// Returns whether `year` is a Gregorian leap year.
///
/// A year is a leap year if divisible by 4 and not by 100, or if divisible by 400.
pub fn is_leap_year(year: i32) -> DateResult<bool> {
    validate_year(year)?;
    Ok((year % 4 == 0 && year % 100 != 0) || year % 400 == 0)
}

/// Returns the number of days in the month with zero-based `month_index` of `year`.
///
/// # Examples
/// ```rust
/// # use datekit::dates::days_in_month;
/// assert_eq!(days_in_month(2024, 1).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 1).unwrap(), 28);
/// ```
pub fn days_in_month(year: i32, month_index: i32) -> DateResult<u32> {
    validate_year(year)?;
    validate_month_index(month_index)?;
    let last = compose_date(year.into(), i64::from(month_index) + 1, 0)?;
    Ok(last.day())
}

/// Returns the number of Sunday-started weeks spanned by `year`.
///
/// Computed as the days elapsed from January 1st to December 31st plus the weekday index of
/// January 1st, divided by 7 and rounded up.
pub fn weeks_in_year(year: i32) -> DateResult<u32> {
    validate_year(year)?;
    let start = compose_date(year.into(), 0, 1)?;
    let end = compose_date(year.into(), 11, 31)?;
    let elapsed = (end - start).num_days();
    let offset = i64::from(start.weekday().num_days_from_sunday());
    Ok(((elapsed + offset + 6) / 7) as u32)
}

/// Print a representation of the month with zero-based `month_index` of `year`.
///
/// Weeks start on Sunday, one row per week, always six rows.
pub fn print_month(year: i32, month_index: i32) -> DateResult<String> {
    let days = days_in_month(year, month_index)?;
    let first = compose_date(year.into(), month_index.into(), 1)?;
    let title = format!("{} {}", month_name(first.month()), year);
    let mut output = format!("{:>20}\n", title);
    output += "Su Mo Tu We Th Fr Sa\n";

    let idx_start = first.weekday().num_days_from_sunday() as usize;
    let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
    for i in 0..days as usize {
        arr[i + idx_start] = format!("{:>2}", i + 1);
    }
    for row in arr.chunks(7) {
        output += &row.iter().join(" ");
        output += "\n";
    }
    Ok(output)
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}
