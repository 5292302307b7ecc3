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
use chrono::TimeDelta;

use crate::dates::calendar::compose_date;
use crate::dates::config::{
    DEFAULT_FIRST_DAY_OF_WEEK, DEFAULT_LAST_DAY_OF_WEEK, MILLIS_PER_DAY, MILLIS_PER_HOUR,
    MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
use crate::dates::{
    validate_instant, validate_month_index, validate_weekday, validate_year, AgeMode, Instant,
    LocalCalendar, MillisSpan, TimeOfDay, TimeSpan,
};
use crate::error::{DateError, DateResult};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Decompose `to - from` into whole hours, remaining minutes and remaining seconds.
///
/// Each component is floored, and the remainders keep the sign of the difference, so a
/// span of minus 90 seconds is `{ hours: -1, minutes: -2, seconds: -30 }`.
pub fn time_span(from: &Instant, to: &Instant) -> DateResult<TimeSpan> {
    validate_instant(from)?;
    validate_instant(to)?;
    let diff = to.millis() - from.millis();
    Ok(TimeSpan {
        hours: diff.div_euclid(MILLIS_PER_HOUR),
        minutes: (diff % MILLIS_PER_HOUR).div_euclid(MILLIS_PER_MINUTE),
        seconds: (diff % MILLIS_PER_MINUTE).div_euclid(MILLIS_PER_SECOND),
    })
}

/// Absolute number of days between two instants, rounded to the nearest day.
///
/// Half days round up.
pub fn days_between(from: &Instant, to: &Instant) -> DateResult<i64> {
    validate_instant(from)?;
    validate_instant(to)?;
    let diff = (to.millis() - from.millis()).abs();
    Ok((diff as f64 / MILLIS_PER_DAY as f64).round() as i64)
}

/// Express `to - from` in milliseconds, seconds and minutes without flooring.
pub fn millis_between(from: &Instant, to: &Instant) -> DateResult<MillisSpan> {
    validate_instant(from)?;
    validate_instant(to)?;
    let milliseconds = (to.millis() - from.millis()) as f64;
    let seconds = milliseconds / MILLIS_PER_SECOND as f64;
    Ok(MillisSpan {
        milliseconds,
        seconds,
        minutes: seconds / 60.0,
    })
}

/// Returns whether `start <= date <= end`.
///
/// Only `date` is validated against the supported range. A `start` after `end` is an error.
pub fn is_in_range(date: &Instant, start: &Instant, end: &Instant) -> DateResult<bool> {
    validate_instant(date)?;
    if start > end {
        return Err(DateError::InvalidRange {
            start: start.millis(),
            end: end.millis(),
        });
    }
    Ok(start <= date && date <= end)
}

fn ymd_fields(local: &NaiveDateTime) -> (i64, i64, i64) {
    (
        local.year().into(),
        local.month0().into(),
        local.day().into(),
    )
}

fn end_of_day_time() -> DateResult<NaiveTime> {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).ok_or(DateError::Overflow)
}

/// Calendar arithmetic on local fields.
///
/// Every method validates its inputs before reading any field.
pub trait CalendarArithmetic: LocalCalendar {
    /// The quarter, 1 ..= 4, of the local month.
    fn quarter_of(&self, date: &Instant) -> DateResult<u32> {
        validate_instant(date)?;
        Ok(self.local_fields(date)?.month0() / 3 + 1)
    }

    /// Local midnight of the first day of the month with zero-based `month_index`.
    fn first_day_of_month(&self, year: i32, month_index: i32) -> DateResult<Instant> {
        validate_year(year)?;
        validate_month_index(month_index)?;
        self.compose(year.into(), month_index.into(), 1, NaiveTime::MIN)
    }

    /// Local midnight of the last day of the month with zero-based `month_index`.
    fn last_day_of_month(&self, year: i32, month_index: i32) -> DateResult<Instant> {
        validate_year(year)?;
        validate_month_index(month_index)?;
        self.compose(year.into(), i64::from(month_index) + 1, 0, NaiveTime::MIN)
    }

    /// The ordinal day, 1 ..= 366, of the local date within its year.
    ///
    /// Counts whole days elapsed since midnight of December 31st of the prior year.
    fn day_of_year(&self, date: &Instant) -> DateResult<u32> {
        validate_instant(date)?;
        let local = self.local_fields(date)?;
        let start = compose_date(local.year().into(), 0, 0)?.and_time(NaiveTime::MIN);
        Ok((local - start).num_days() as u32)
    }

    /// Bucket the local hour into a period of the day.
    fn time_of_day(&self, date: &Instant) -> DateResult<TimeOfDay> {
        validate_instant(date)?;
        Ok(TimeOfDay::from_hour(self.local_fields(date)?.hour()))
    }

    /// English name of the local weekday.
    fn weekday_name(&self, date: &Instant) -> DateResult<&'static str> {
        validate_instant(date)?;
        let weekday = self.local_fields(date)?.weekday().num_days_from_sunday();
        Ok(WEEKDAY_NAMES[weekday as usize])
    }

    /// Returns whether the local weekday is Saturday or Sunday.
    fn is_weekend(&self, date: &Instant) -> DateResult<bool> {
        validate_instant(date)?;
        Ok(matches!(
            self.local_fields(date)?.weekday(),
            Weekday::Sat | Weekday::Sun
        ))
    }

    /// Local midnight of the same calendar day.
    fn start_of_day(&self, date: &Instant) -> DateResult<Instant> {
        validate_instant(date)?;
        let (y, m, d) = ymd_fields(&self.local_fields(date)?);
        self.compose(y, m, d, NaiveTime::MIN)
    }

    /// Local 23:59:59.999 of the same calendar day.
    fn end_of_day(&self, date: &Instant) -> DateResult<Instant> {
        validate_instant(date)?;
        let (y, m, d) = ymd_fields(&self.local_fields(date)?);
        self.compose(y, m, d, end_of_day_time()?)
    }

    /// Start of the week containing `date`, with weeks starting on Monday.
    fn start_of_week(&self, date: &Instant) -> DateResult<Instant> {
        self.start_of_week_from(date, DEFAULT_FIRST_DAY_OF_WEEK)
    }

    /// Start of the week containing `date`, with weeks starting on `first_day_of_week`
    /// (0 = Sunday .. 6 = Saturday).
    ///
    /// Only `date` is validated; `first_day_of_week` is taken modulo 7.
    fn start_of_week_from(&self, date: &Instant, first_day_of_week: i32) -> DateResult<Instant> {
        validate_instant(date)?;
        let local = self.local_fields(date)?;
        let day = local.weekday().num_days_from_sunday() as i32;
        let offset = (day - first_day_of_week).rem_euclid(7);
        let (y, m, d) = ymd_fields(&local);
        self.compose(y, m, d - i64::from(offset), NaiveTime::MIN)
    }

    /// End of the week containing `date`, with weeks ending on Sunday.
    fn end_of_week(&self, date: &Instant) -> DateResult<Instant> {
        self.end_of_week_to(date, DEFAULT_LAST_DAY_OF_WEEK)
    }

    /// End of the week containing `date`, with weeks ending on `last_day_of_week`
    /// (0 = Sunday .. 6 = Saturday).
    fn end_of_week_to(&self, date: &Instant, last_day_of_week: i32) -> DateResult<Instant> {
        validate_instant(date)?;
        validate_weekday(last_day_of_week)?;
        let local = self.local_fields(date)?;
        let day = local.weekday().num_days_from_sunday() as i32;
        let offset = (last_day_of_week - day + 7) % 7;
        let (y, m, d) = ymd_fields(&local);
        self.compose(y, m, d + i64::from(offset), end_of_day_time()?)
    }

    /// Difference in local calendar months, ignoring the day of the month.
    fn months_between(&self, from: &Instant, to: &Instant) -> DateResult<i32> {
        validate_instant(from)?;
        validate_instant(to)?;
        let f = self.local_fields(from)?;
        let t = self.local_fields(to)?;
        Ok((t.year() - f.year()) * 12 + (t.month0() as i32 - f.month0() as i32))
    }

    /// Return a vector of instants stepping one local calendar day from `from` up to `to`,
    /// inclusive.
    ///
    /// The local time of day of `from` is kept at each step. Empty if `from > to`.
    fn day_range(&self, from: &Instant, to: &Instant) -> DateResult<Vec<Instant>> {
        validate_instant(from)?;
        validate_instant(to)?;
        let mut vec = Vec::new();
        let mut sample_date = *from;
        while sample_date <= *to {
            vec.push(sample_date);
            let local = self.local_fields(&sample_date)?;
            let (y, m, d) = ymd_fields(&local);
            sample_date = self.compose(y, m, d + 1, local.time())?;
        }
        Ok(vec)
    }

    /// Number of local calendar days from `from` to `to`, inclusive, that are not a Saturday
    /// or Sunday.
    ///
    /// Zero if `from > to`.
    #[tracing::instrument(level = "trace", skip(self))]
    fn business_days_between(&self, from: &Instant, to: &Instant) -> DateResult<u32> {
        let mut count: u32 = 0;
        for date in self.day_range(from, to)? {
            if !self.is_weekend(&date)? {
                count += 1;
            }
        }
        tracing::trace!(count, "counted business days");
        Ok(count)
    }

    /// Age at `target` of someone born at `birth`, under the given convention.
    ///
    /// Completed years are counted on local fields; [`AgeMode::Korean`] adds one.
    fn age(&self, birth: &Instant, target: &Instant, mode: AgeMode) -> DateResult<i32> {
        validate_instant(birth)?;
        validate_instant(target)?;
        let b = self.local_fields(birth)?;
        let t = self.local_fields(target)?;
        let mut years = t.year() - b.year();
        if (t.month(), t.day()) < (b.month(), b.day()) {
            years -= 1;
        }
        match mode {
            AgeMode::Korean => Ok(years + 1),
            AgeMode::International => Ok(years),
        }
    }

    /// Round to the nearest local minute; 30 seconds or more rounds up.
    fn round_to_nearest_minute(&self, date: &Instant) -> DateResult<Instant> {
        validate_instant(date)?;
        let local = self.local_fields(date)?;
        let truncated = local
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .ok_or(DateError::Overflow)?;
        let rounded = if local.second() >= 30 {
            truncated
                .checked_add_signed(TimeDelta::minutes(1))
                .ok_or(DateError::Overflow)?
        } else {
            truncated
        };
        self.resolve_local(&rounded)
    }
}

impl<T: LocalCalendar> CalendarArithmetic for T {}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{ymd, ymd_hms, ZoneCal};
    use chrono_tz::America::New_York;

    fn utc() -> ZoneCal<Utc> {
        ZoneCal::new(Utc)
    }

    fn seoul() -> ZoneCal<FixedOffset> {
        ZoneCal::new(FixedOffset::east_opt(9 * 3600).unwrap())
    }

    #[test]
    fn test_time_span() {
        let from = ymd(2024, 1, 1);
        let to = Instant::from_millis(from.millis() + 50 * 3_600_000 + 25 * 60_000 + 10_500);
        assert_eq!(
            time_span(&from, &to).unwrap(),
            TimeSpan {
                hours: 50,
                minutes: 25,
                seconds: 10
            }
        );
        let back = Instant::from_millis(from.millis() - 90_000);
        assert_eq!(
            time_span(&from, &back).unwrap(),
            TimeSpan {
                hours: -1,
                minutes: -2,
                seconds: -30
            }
        );
    }

    #[test]
    fn test_days_between_rounds_half_up() {
        let a = ymd(2024, 1, 1);
        assert_eq!(days_between(&a, &a).unwrap(), 0);
        assert_eq!(days_between(&a, &ymd_hms(2024, 1, 2, 12, 0, 0)).unwrap(), 2);
        assert_eq!(days_between(&a, &ymd_hms(2024, 1, 2, 11, 59, 59)).unwrap(), 1);
        assert_eq!(days_between(&ymd(2024, 3, 1), &a).unwrap(), 60);
    }

    #[test]
    fn test_millis_between() {
        let a = ymd(2024, 1, 1);
        let b = Instant::from_millis(a.millis() + 90_500);
        let span = millis_between(&a, &b).unwrap();
        assert_eq!(span.milliseconds, 90_500.0);
        assert_eq!(span.seconds, 90.5);
        assert!((span.minutes - 90.5 / 60.0).abs() < 1e-12);
        assert_eq!(millis_between(&b, &a).unwrap().milliseconds, -90_500.0);
    }

    #[test]
    fn test_is_in_range() {
        let d = ymd(2024, 6, 1);
        assert!(is_in_range(&d, &ymd(2024, 1, 1), &ymd(2024, 12, 31)).unwrap());
        assert!(is_in_range(&d, &d, &d).unwrap());
        assert!(!is_in_range(&d, &ymd(2024, 7, 1), &ymd(2024, 12, 31)).unwrap());
        assert!(is_in_range(&d, &ymd(2024, 12, 31), &ymd(2024, 1, 1)).is_err());
        // start and end are not range checked
        assert!(is_in_range(&d, &Instant::from_millis(-1), &ymd(3001, 1, 1)).unwrap());
    }

    #[test]
    fn test_quarter_of() {
        let cal = utc();
        assert_eq!(cal.quarter_of(&ymd(2024, 1, 1)).unwrap(), 1);
        assert_eq!(cal.quarter_of(&ymd(2024, 3, 31)).unwrap(), 1);
        assert_eq!(cal.quarter_of(&ymd(2024, 4, 1)).unwrap(), 2);
        assert_eq!(cal.quarter_of(&ymd(2024, 12, 31)).unwrap(), 4);
        // 2024-03-31 20:00 UTC is already April in Seoul
        assert_eq!(seoul().quarter_of(&ymd_hms(2024, 3, 31, 20, 0, 0)).unwrap(), 2);
    }

    #[test]
    fn test_first_and_last_day_of_month() {
        let cal = utc();
        assert_eq!(cal.first_day_of_month(2024, 1).unwrap(), ymd(2024, 2, 1));
        assert_eq!(cal.last_day_of_month(2024, 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(cal.last_day_of_month(2023, 1).unwrap(), ymd(2023, 2, 28));
        assert_eq!(cal.last_day_of_month(2024, 11).unwrap(), ymd(2024, 12, 31));
        assert_eq!(cal.last_day_of_month(2024, 3).unwrap(), ymd(2024, 4, 30));
        assert!(cal.first_day_of_month(2024, 12).is_err());
        assert!(cal.last_day_of_month(0, 0).is_err());
        // local midnight in Seoul is 15:00 UTC of the previous day
        assert_eq!(
            seoul().first_day_of_month(2024, 0).unwrap(),
            ymd_hms(2023, 12, 31, 15, 0, 0)
        );
    }

    #[test]
    fn test_day_of_year() {
        // A weekday-delta formula would only ever yield 0 or -1 here; elapsed days are used.
        let cal = utc();
        assert_eq!(cal.day_of_year(&ymd(2024, 1, 1)).unwrap(), 1);
        assert_eq!(cal.day_of_year(&ymd_hms(2024, 2, 29, 23, 0, 0)).unwrap(), 60);
        assert_eq!(cal.day_of_year(&ymd(2024, 10, 15)).unwrap(), 289);
        assert_eq!(cal.day_of_year(&ymd(2024, 12, 31)).unwrap(), 366);
        assert_eq!(cal.day_of_year(&ymd(2023, 12, 31)).unwrap(), 365);
    }

    #[test]
    fn test_time_of_day_and_weekday_name() {
        let cal = utc();
        assert_eq!(
            cal.time_of_day(&ymd_hms(2024, 10, 15, 9, 0, 0)).unwrap(),
            TimeOfDay::Morning
        );
        assert_eq!(
            cal.time_of_day(&ymd_hms(2024, 10, 15, 22, 0, 0)).unwrap(),
            TimeOfDay::Night
        );
        // 09:00 UTC is 18:00 in Seoul
        assert_eq!(
            seoul().time_of_day(&ymd_hms(2024, 10, 15, 9, 0, 0)).unwrap(),
            TimeOfDay::Evening
        );
        assert_eq!(cal.weekday_name(&ymd(2024, 10, 15)).unwrap(), "Tuesday");
        assert_eq!(cal.weekday_name(&ymd(2024, 10, 13)).unwrap(), "Sunday");
    }

    #[test]
    fn test_is_weekend() {
        let cal = utc();
        assert!(cal.is_weekend(&ymd(2024, 1, 6)).unwrap());
        assert!(cal.is_weekend(&ymd(2024, 1, 7)).unwrap());
        assert!(!cal.is_weekend(&ymd(2024, 1, 8)).unwrap());
        // Friday 20:00 UTC is Saturday morning in Seoul
        assert!(seoul().is_weekend(&ymd_hms(2024, 1, 5, 20, 0, 0)).unwrap());
    }

    #[test]
    fn test_start_and_end_of_day() {
        let cal = utc();
        let d = ymd_hms(2024, 10, 15, 13, 45, 12);
        assert_eq!(cal.start_of_day(&d).unwrap(), ymd(2024, 10, 15));
        assert_eq!(
            cal.end_of_day(&d).unwrap(),
            Instant::from_millis(ymd(2024, 10, 16).millis() - 1)
        );
    }

    #[test]
    fn test_start_and_end_of_day_across_dst() {
        let cal = ZoneCal::new(New_York);
        // 2024-03-10 is 23 hours long in New York
        let d = ymd_hms(2024, 3, 10, 16, 0, 0);
        let start = cal.start_of_day(&d).unwrap();
        let end = cal.end_of_day(&d).unwrap();
        assert_eq!(start, ymd_hms(2024, 3, 10, 5, 0, 0));
        assert_eq!(end.millis() - start.millis(), 23 * 3_600_000 - 1);
    }

    #[test]
    fn test_start_of_week() {
        let cal = utc();
        let tue = ymd_hms(2024, 10, 15, 10, 0, 0);
        assert_eq!(cal.start_of_week(&tue).unwrap(), ymd(2024, 10, 14));
        assert_eq!(cal.start_of_week_from(&tue, 0).unwrap(), ymd(2024, 10, 13));
        assert_eq!(cal.start_of_week_from(&tue, 2).unwrap(), ymd(2024, 10, 15));
        assert_eq!(cal.start_of_week_from(&tue, 3).unwrap(), ymd(2024, 10, 9));
        // crossing into the previous month
        assert_eq!(cal.start_of_week(&ymd(2024, 10, 1)).unwrap(), ymd(2024, 9, 30));
        // the first weekday is not bounds checked, it wraps around the week
        assert_eq!(cal.start_of_week_from(&tue, 7).unwrap(), ymd(2024, 10, 13));
        assert_eq!(cal.start_of_week_from(&tue, -5).unwrap(), ymd(2024, 10, 15));
        assert!(cal.start_of_week_from(&Instant::from_millis(-1), 1).is_err());
    }

    #[test]
    fn test_end_of_week() {
        let cal = utc();
        let tue = ymd_hms(2024, 10, 15, 10, 0, 0);
        let sunday_end = Instant::from_millis(ymd(2024, 10, 21).millis() - 1);
        assert_eq!(cal.end_of_week(&tue).unwrap(), sunday_end);
        let saturday_end = Instant::from_millis(ymd(2024, 10, 20).millis() - 1);
        assert_eq!(cal.end_of_week_to(&tue, 6).unwrap(), saturday_end);
        let tuesday_end = Instant::from_millis(ymd(2024, 10, 16).millis() - 1);
        assert_eq!(cal.end_of_week_to(&tue, 2).unwrap(), tuesday_end);
        assert_eq!(
            cal.end_of_week_to(&tue, -1),
            Err(DateError::InvalidWeekday { weekday: -1 })
        );
    }

    #[test]
    fn test_months_between() {
        let cal = utc();
        assert_eq!(cal.months_between(&ymd(2024, 1, 31), &ymd(2024, 3, 1)).unwrap(), 2);
        assert_eq!(cal.months_between(&ymd(2023, 11, 1), &ymd(2024, 2, 1)).unwrap(), 3);
        assert_eq!(cal.months_between(&ymd(2024, 3, 1), &ymd(2024, 1, 31)).unwrap(), -2);
        // day of month is ignored
        assert_eq!(cal.months_between(&ymd(2024, 1, 31), &ymd(2024, 2, 1)).unwrap(), 1);
    }

    #[test]
    fn test_day_range() {
        let cal = utc();
        let days = cal
            .day_range(&ymd_hms(2024, 2, 27, 8, 0, 0), &ymd(2024, 3, 2))
            .unwrap();
        assert_eq!(
            days,
            vec![
                ymd_hms(2024, 2, 27, 8, 0, 0),
                ymd_hms(2024, 2, 28, 8, 0, 0),
                ymd_hms(2024, 2, 29, 8, 0, 0),
                ymd_hms(2024, 3, 1, 8, 0, 0),
            ]
        );
        assert!(cal.day_range(&ymd(2024, 3, 2), &ymd(2024, 3, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_day_range_keeps_local_time_across_dst() {
        let cal = ZoneCal::new(New_York);
        let days = cal
            .day_range(&ymd_hms(2024, 3, 9, 17, 0, 0), &ymd_hms(2024, 3, 11, 16, 0, 0))
            .unwrap();
        // noon local on each day, EST then EDT
        assert_eq!(
            days,
            vec![
                ymd_hms(2024, 3, 9, 17, 0, 0),
                ymd_hms(2024, 3, 10, 16, 0, 0),
                ymd_hms(2024, 3, 11, 16, 0, 0),
            ]
        );
    }

    #[test]
    fn test_business_days_between() {
        let cal = utc();
        let mon = ymd(2024, 1, 8);
        assert_eq!(cal.business_days_between(&mon, &mon).unwrap(), 1);
        assert_eq!(
            cal.business_days_between(&ymd(2024, 1, 6), &ymd(2024, 1, 7)).unwrap(),
            0
        );
        assert_eq!(
            cal.business_days_between(&ymd(2024, 1, 1), &ymd(2024, 1, 31)).unwrap(),
            23
        );
        // reversed bounds count nothing
        assert_eq!(
            cal.business_days_between(&ymd(2024, 1, 31), &ymd(2024, 1, 1)).unwrap(),
            0
        );
    }

    #[test]
    fn test_age() {
        let cal = utc();
        let birth = ymd(2000, 1, 1);
        let target = ymd(2024, 1, 1);
        assert_eq!(cal.age(&birth, &target, AgeMode::International).unwrap(), 24);
        assert_eq!(cal.age(&birth, &target, AgeMode::Korean).unwrap(), 25);
        let birth = ymd(2000, 6, 15);
        assert_eq!(
            cal.age(&birth, &ymd(2024, 6, 14), AgeMode::International).unwrap(),
            23
        );
        assert_eq!(
            cal.age(&birth, &ymd(2024, 6, 15), AgeMode::International).unwrap(),
            24
        );
        assert_eq!(cal.age(&birth, &ymd(2024, 6, 14), AgeMode::from("kr")).unwrap(), 24);
        assert!(cal
            .age(&birth, &Instant::from_millis(-1), AgeMode::Korean)
            .is_err());
    }

    #[test]
    fn test_round_to_nearest_minute() {
        let cal = utc();
        let base = ymd_hms(2024, 10, 15, 10, 20, 0);
        let down = Instant::from_millis(base.millis() + 29_999);
        let up = Instant::from_millis(base.millis() + 30_000);
        assert_eq!(cal.round_to_nearest_minute(&down).unwrap(), base);
        assert_eq!(
            cal.round_to_nearest_minute(&up).unwrap(),
            ymd_hms(2024, 10, 15, 10, 21, 0)
        );
        let late = Instant::from_millis(ymd(2024, 12, 31).millis() + 86_399_500);
        assert_eq!(cal.round_to_nearest_minute(&late).unwrap(), ymd(2025, 1, 1));
    }
}
