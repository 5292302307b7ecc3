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

//! The time zone seam through which every local calendar field is read and written.

use chrono::prelude::*;
use chrono::{Offset, TimeDelta};
use tracing::debug;

use crate::dates::calendar::compose_date;
use crate::dates::{validate_instant, Instant};
use crate::error::{DateError, DateResult};

/// Reads and writes local calendar fields of an [`Instant`].
///
/// Implementors supply the conversion between instants and local wall-clock time. The default
/// methods build on that to express "set a field and let it overflow" as the construction of
/// a new instant.
pub trait LocalCalendar {
    /// Returns the local wall-clock date and time of `date`.
    fn local_fields(&self, date: &Instant) -> DateResult<NaiveDateTime>;

    /// Returns the instant at which the local wall-clock reads `local`.
    ///
    /// Ambiguous local times (a repeated hour) resolve to the earlier instant. Local times
    /// skipped by a forward transition are moved forward by one hour.
    fn resolve_local(&self, local: &NaiveDateTime) -> DateResult<Instant>;

    /// Returns the local offset from UTC, in seconds east of Greenwich, in effect at `date`.
    fn offset_seconds(&self, date: &Instant) -> DateResult<i32>;

    /// Construct an instant from local fields, letting out of range fields roll over.
    ///
    /// `month_index` is zero-based and `day` is one-based; either may be negative or exceed
    /// its calendar range, e.g. day `0` is the last day of the previous month.
    fn compose(
        &self,
        year: i64,
        month_index: i64,
        day: i64,
        time: NaiveTime,
    ) -> DateResult<Instant> {
        let date = compose_date(year, month_index, day)?;
        self.resolve_local(&date.and_time(time))
    }

    /// Minutes to add to local time to obtain UTC, i.e. positive west of Greenwich.
    fn timezone_offset(&self, date: &Instant) -> DateResult<i32> {
        validate_instant(date)?;
        Ok(-self.offset_seconds(date)? / 60)
    }
}

/// A [`LocalCalendar`] bound to a `chrono` time zone.
///
/// Use [`ZoneCal::host`] for the host's configured zone, or any other `chrono` zone such as
/// `Utc`, a `FixedOffset` or a `chrono_tz::Tz` for deterministic results.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCal<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> ZoneCal<Tz> {
    /// Create a calendar reading local fields in `tz`.
    pub fn new(tz: Tz) -> Self {
        ZoneCal { tz }
    }

    /// The time zone of the calendar.
    pub fn zone(&self) -> &Tz {
        &self.tz
    }
}

impl ZoneCal<Local> {
    /// A calendar in the host's configured time zone.
    pub fn host() -> Self {
        ZoneCal::new(Local)
    }
}

impl<Tz: TimeZone> LocalCalendar for ZoneCal<Tz> {
    fn local_fields(&self, date: &Instant) -> DateResult<NaiveDateTime> {
        Ok(date.to_utc()?.with_timezone(&self.tz).naive_local())
    }

    fn resolve_local(&self, local: &NaiveDateTime) -> DateResult<Instant> {
        if let Some(dt) = self.tz.from_local_datetime(local).earliest() {
            return Ok(Instant::from_datetime(&dt));
        }
        debug!(%local, "local time skipped by the zone, moving forward one hour");
        let shifted = local
            .checked_add_signed(TimeDelta::hours(1))
            .ok_or(DateError::Overflow)?;
        self.tz
            .from_local_datetime(&shifted)
            .earliest()
            .map(|dt| Instant::from_datetime(&dt))
            .ok_or(DateError::NonexistentLocalTime { local: *local })
    }

    fn offset_seconds(&self, date: &Instant) -> DateResult<i32> {
        let utc = date.to_utc()?.naive_utc();
        Ok(self.tz.offset_from_utc_datetime(&utc).fix().local_minus_utc())
    }
}
