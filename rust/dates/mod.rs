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

//! Validate, query, compare, shift and format calendar dates.
//!
//! The purpose of this module is to provide the everyday date operations of an application
//! without re-deriving calendar math, including;
//! - Validation of instants and calendar fields before any computation takes place.
//! - Leap years, month lengths, quarters, ordinal days and week boundaries.
//! - Business day counting and age calculation under Korean or international conventions.
//! - Shifting by years, months or days with natural rollover.
//! - ISO, locale and time zone aware rendering.
//!
//! # Instants
//!
//! An [`Instant`] is an immutable point in time with millisecond resolution. Every operation
//! which "modifies" a date returns a new [`Instant`]. Supported instants lie between the epoch
//! and the start of the year 3000 UTC; anything else is rejected by [`validate_instant`].
//!
//! # Local Calendars
//!
//! Operations on local calendar fields are provided by the [`CalendarArithmetic`],
//! [`DateShift`] and [`DateFormat`] traits, implemented for every [`LocalCalendar`]. The
//! [`ZoneCal`] type binds a [`LocalCalendar`] to any `chrono` time zone, and the
//! [`host`] module offers the same operations as free functions in the host's zone.
//!
//! ### Example
//! This example counts business days in January 2024 and shifts the last day of January by
//! one month, which rolls over into March rather than clamping to the end of February.
//! ```rust
//! # use datekit::dates::{ymd, CalendarArithmetic, DateShift, ZoneCal};
//! # use chrono::Utc;
//! let cal = ZoneCal::new(Utc);
//! assert_eq!(cal.business_days_between(&ymd(2024, 1, 1), &ymd(2024, 1, 31)).unwrap(), 23);
//! assert_eq!(cal.add_months(&ymd(2024, 1, 31), 1).unwrap(), ymd(2024, 3, 2));
//! ```
//!
//! # Formatting
//!
//! Locale and time zone aware rendering goes through the [`Intl`] trait. [`ChronoIntl`] is the
//! default implementation.
//!
//! ### Example
//! ```rust
//! # use datekit::dates::{ymd_hms, format_in_time_zone, format_iso_string};
//! let d = ymd_hms(2024, 10, 15, 12, 0, 0);
//! assert_eq!(format_iso_string(&d).unwrap(), "2024-10-15T12:00:00.000Z");
//! assert_eq!(format_in_time_zone(&d, "Asia/Seoul").unwrap(), "10/15/2024, 09:00:00 PM");
//! assert!(format_in_time_zone(&d, "Asia/Atlantis").is_err());
//! ```

mod accessors;
mod arithmetic;
mod calendar;
mod compare;
pub mod config;
mod format;
pub mod host;
mod instant;
mod shift;
mod span;
mod validate;
mod zone;

mod serde;

pub use crate::dates::{
    accessors::{get_time, utc_date, utc_full_year, utc_month_index, utc_weekday},
    arithmetic::{days_between, is_in_range, millis_between, time_span, CalendarArithmetic},
    calendar::{days_in_month, is_leap_year, print_month, weeks_in_year},
    compare::{after, before, same_day},
    format::{
        format_in_time_zone, format_in_time_zone_with, format_iso_string, format_locale_with,
        format_utc_string, ChronoIntl, DateFormat, FormatOptions, FormatStyle, Intl,
    },
    instant::{ymd, ymd_hms, Instant},
    shift::DateShift,
    span::{AgeMode, MillisSpan, TimeOfDay, TimeSpan},
    validate::{
        is_valid_instant, validate_instant, validate_month, validate_month_index,
        validate_month_offset, validate_weekday, validate_year, validate_year_offset,
    },
    zone::{LocalCalendar, ZoneCal},
};
