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

//! Operations on local fields bound to the host's configured time zone.
//!
//! Each function here is shorthand for the method of the same name on
//! [`ZoneCal::host()`](ZoneCal::host). Use a [`ZoneCal`] directly for a fixed zone.

use crate::dates::config::{DEFAULT_AGE_MODE, DEFAULT_LOCALE};
use crate::dates::{
    format_locale_with, AgeMode, CalendarArithmetic, ChronoIntl, DateFormat, DateShift,
    FormatOptions, Instant, LocalCalendar, TimeOfDay, ZoneCal,
};
use crate::error::DateResult;

pub fn timezone_offset(date: &Instant) -> DateResult<i32> {
    ZoneCal::host().timezone_offset(date)
}

pub fn quarter_of(date: &Instant) -> DateResult<u32> {
    ZoneCal::host().quarter_of(date)
}

pub fn first_day_of_month(year: i32, month_index: i32) -> DateResult<Instant> {
    ZoneCal::host().first_day_of_month(year, month_index)
}

pub fn last_day_of_month(year: i32, month_index: i32) -> DateResult<Instant> {
    ZoneCal::host().last_day_of_month(year, month_index)
}

pub fn day_of_year(date: &Instant) -> DateResult<u32> {
    ZoneCal::host().day_of_year(date)
}

pub fn time_of_day(date: &Instant) -> DateResult<TimeOfDay> {
    ZoneCal::host().time_of_day(date)
}

pub fn weekday_name(date: &Instant) -> DateResult<&'static str> {
    ZoneCal::host().weekday_name(date)
}

pub fn is_weekend(date: &Instant) -> DateResult<bool> {
    ZoneCal::host().is_weekend(date)
}

pub fn start_of_day(date: &Instant) -> DateResult<Instant> {
    ZoneCal::host().start_of_day(date)
}

pub fn end_of_day(date: &Instant) -> DateResult<Instant> {
    ZoneCal::host().end_of_day(date)
}

pub fn start_of_week(date: &Instant) -> DateResult<Instant> {
    ZoneCal::host().start_of_week(date)
}

pub fn start_of_week_from(date: &Instant, first_day_of_week: i32) -> DateResult<Instant> {
    ZoneCal::host().start_of_week_from(date, first_day_of_week)
}

pub fn end_of_week(date: &Instant) -> DateResult<Instant> {
    ZoneCal::host().end_of_week(date)
}

pub fn end_of_week_to(date: &Instant, last_day_of_week: i32) -> DateResult<Instant> {
    ZoneCal::host().end_of_week_to(date, last_day_of_week)
}

pub fn months_between(from: &Instant, to: &Instant) -> DateResult<i32> {
    ZoneCal::host().months_between(from, to)
}

pub fn day_range(from: &Instant, to: &Instant) -> DateResult<Vec<Instant>> {
    ZoneCal::host().day_range(from, to)
}

pub fn business_days_between(from: &Instant, to: &Instant) -> DateResult<u32> {
    ZoneCal::host().business_days_between(from, to)
}

/// Korean age today of someone born at `birth`.
pub fn age(birth: &Instant) -> DateResult<i32> {
    age_at(birth, &Instant::now(), DEFAULT_AGE_MODE)
}

pub fn age_at(birth: &Instant, target: &Instant, mode: AgeMode) -> DateResult<i32> {
    ZoneCal::host().age(birth, target, mode)
}

pub fn round_to_nearest_minute(date: &Instant) -> DateResult<Instant> {
    ZoneCal::host().round_to_nearest_minute(date)
}

pub fn add_years(date: &Instant, years: i32) -> DateResult<Instant> {
    ZoneCal::host().add_years(date, years)
}

pub fn add_months(date: &Instant, months: i32) -> DateResult<Instant> {
    ZoneCal::host().add_months(date, months)
}

pub fn add_days(date: &Instant, days: i64) -> DateResult<Instant> {
    ZoneCal::host().add_days(date, days)
}

pub fn subtract_years(date: &Instant, years: i32) -> DateResult<Instant> {
    ZoneCal::host().subtract_years(date, years)
}

pub fn subtract_months(date: &Instant, months: i32) -> DateResult<Instant> {
    ZoneCal::host().subtract_months(date, months)
}

pub fn subtract_days(date: &Instant, days: i64) -> DateResult<Instant> {
    ZoneCal::host().subtract_days(date, days)
}

pub fn format_iso_date(date: &Instant) -> DateResult<String> {
    ZoneCal::host().format_iso_date(date)
}

pub fn format_date_string(date: &Instant) -> DateResult<String> {
    ZoneCal::host().format_date_string(date)
}

/// Render with the `"ko-KR"` locale, date and time, in the host zone.
pub fn format_locale(date: &Instant) -> DateResult<String> {
    format_locale_with(&ChronoIntl, date, DEFAULT_LOCALE, &FormatOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{ymd, ymd_hms};

    // Only properties that hold in every host zone are asserted here.

    #[test]
    fn test_day_boundaries_round_trip() {
        let d = ymd_hms(2024, 10, 15, 12, 0, 0);
        let start = start_of_day(&d).unwrap();
        assert!(start <= d);
        assert_eq!(start_of_day(&end_of_day(&d).unwrap()).unwrap(), start);
    }

    #[test]
    fn test_subtract_matches_negated_add() {
        let d = ymd_hms(2024, 5, 20, 12, 0, 0);
        assert_eq!(subtract_days(&d, 10).unwrap(), add_days(&d, -10).unwrap());
        assert_eq!(subtract_months(&d, 2).unwrap(), add_months(&d, -2).unwrap());
        assert_eq!(subtract_years(&d, 3).unwrap(), add_years(&d, -3).unwrap());
    }

    #[test]
    fn test_age_today_is_korean() {
        let birth = ymd(2000, 7, 1);
        let now = Instant::now();
        let korean = age_at(&birth, &now, AgeMode::Korean).unwrap();
        let international = age_at(&birth, &now, AgeMode::International).unwrap();
        assert_eq!(korean, international + 1);
        assert_eq!(DEFAULT_AGE_MODE, AgeMode::Korean);
        // age() samples the clock again, at most one birthday later
        let today = age(&birth).unwrap();
        assert!(today == korean || today == korean + 1);
    }

    #[test]
    fn test_host_validates() {
        let bad = Instant::from_millis(-1);
        assert!(quarter_of(&bad).is_err());
        assert!(format_locale(&bad).is_err());
        assert!(timezone_offset(&bad).is_err());
        assert!(first_day_of_month(2024, 12).is_err());
        assert!(format_locale(&ymd(2024, 1, 1)).is_ok());
    }
}
