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

//! String rendering of instants.
//!
//! Locale and time zone aware rendering is delegated to an [`Intl`] implementation so that the
//! source of locale data and zone rules can be swapped. [`ChronoIntl`] uses the locale tables
//! shipped with `chrono` and the IANA database shipped with `chrono-tz`.

use chrono::prelude::*;
use chrono::Locale;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use tracing::debug;

use crate::dates::config::{TIME_ZONE_LOCALE, TIME_ZONE_PATTERN};
use crate::dates::{validate_instant, Instant, LocalCalendar};
use crate::error::{DateError, DateResult};

/// Which fields a locale rendering includes when no explicit pattern is given.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Date and time.
    #[default]
    DateTime,
    /// Date only.
    Date,
    /// Time only.
    Time,
}

impl FormatStyle {
    /// The locale dependent `strftime` pattern of the style.
    pub fn pattern(&self) -> &'static str {
        match self {
            FormatStyle::DateTime => "%x %X",
            FormatStyle::Date => "%x",
            FormatStyle::Time => "%X",
        }
    }
}

/// Options passed through to an [`Intl`] implementation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// IANA time zone to render in. The host zone is used when absent.
    pub time_zone: Option<String>,
    /// Fields to include when `pattern` is absent.
    pub style: FormatStyle,
    /// An explicit `strftime` pattern, localized for names of months, weekdays and AM/PM.
    pub pattern: Option<String>,
}

/// Locale and time zone aware formatting capability.
pub trait Intl {
    /// Render `instant` for the BCP 47 style `locale` tag, e.g. `"ko-KR"`.
    fn format(&self, instant: &Instant, locale: &str, options: &FormatOptions)
        -> DateResult<String>;

    /// Returns whether `identifier` names a known time zone.
    fn resolve_time_zone(&self, identifier: &str) -> bool;
}

/// [`Intl`] implementation backed by `chrono` locale data and the `chrono-tz` database.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ChronoIntl;

impl ChronoIntl {
    fn locale(tag: &str) -> DateResult<Locale> {
        let name = tag.replace('-', "_");
        Locale::try_from(name.as_str()).map_err(|_| DateError::InvalidLocale {
            locale: tag.to_string(),
        })
    }

    fn time_zone(identifier: &str) -> DateResult<Tz> {
        identifier.parse::<Tz>().map_err(|_| DateError::InvalidTimeZone {
            name: identifier.to_string(),
        })
    }
}

impl Intl for ChronoIntl {
    fn format(
        &self,
        instant: &Instant,
        locale: &str,
        options: &FormatOptions,
    ) -> DateResult<String> {
        let locale = ChronoIntl::locale(locale)?;
        let pattern = options
            .pattern
            .as_deref()
            .unwrap_or_else(|| options.style.pattern());
        let utc = instant.to_utc()?;
        match options.time_zone.as_deref() {
            Some(name) => {
                let tz = ChronoIntl::time_zone(name)?;
                render_localized(&utc.with_timezone(&tz), pattern, locale)
            }
            None => render_localized(&utc.with_timezone(&Local), pattern, locale),
        }
    }

    fn resolve_time_zone(&self, identifier: &str) -> bool {
        identifier.parse::<Tz>().is_ok()
    }
}

fn render_localized<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    pattern: &str,
    locale: Locale,
) -> DateResult<String>
where
    Tz::Offset: fmt::Display,
{
    let mut output = String::new();
    write!(output, "{}", dt.format_localized(pattern, locale)).map_err(|_| {
        DateError::InvalidFormat {
            pattern: pattern.to_string(),
        }
    })?;
    Ok(output)
}

fn render<T: fmt::Display>(item: T, pattern: &str) -> DateResult<String> {
    let mut output = String::new();
    write!(output, "{}", item).map_err(|_| DateError::InvalidFormat {
        pattern: pattern.to_string(),
    })?;
    Ok(output)
}

/// Render in UTC like `Tue, 15 Oct 2024 12:00:00 GMT`.
pub fn format_utc_string(date: &Instant) -> DateResult<String> {
    validate_instant(date)?;
    let pattern = "%a, %d %b %Y %H:%M:%S GMT";
    render(date.to_utc()?.format(pattern), pattern)
}

/// Render in UTC as ISO 8601 with milliseconds, like `2024-10-15T12:00:00.000Z`.
pub fn format_iso_string(date: &Instant) -> DateResult<String> {
    validate_instant(date)?;
    let pattern = "%Y-%m-%dT%H:%M:%S%.3fZ";
    render(date.to_utc()?.format(pattern), pattern)
}

/// Render through `intl` for the given locale and options.
pub fn format_locale_with<I: Intl + ?Sized>(
    intl: &I,
    date: &Instant,
    locale: &str,
    options: &FormatOptions,
) -> DateResult<String> {
    validate_instant(date)?;
    intl.format(date, locale, options)
}

/// Render in the IANA zone `time_zone` like `10/15/2024, 09:00:00 PM`.
pub fn format_in_time_zone(date: &Instant, time_zone: &str) -> DateResult<String> {
    format_in_time_zone_with(&ChronoIntl, date, time_zone)
}

/// Render through `intl` in the IANA zone `time_zone` like `10/15/2024, 09:00:00 PM`.
///
/// The zone is probed first; an unknown identifier is [`DateError::InvalidTimeZone`].
pub fn format_in_time_zone_with<I: Intl + ?Sized>(
    intl: &I,
    date: &Instant,
    time_zone: &str,
) -> DateResult<String> {
    validate_instant(date)?;
    if !intl.resolve_time_zone(time_zone) {
        debug!(time_zone, "time zone not recognised");
        return Err(DateError::InvalidTimeZone {
            name: time_zone.to_string(),
        });
    }
    let options = FormatOptions {
        time_zone: Some(time_zone.to_string()),
        style: FormatStyle::DateTime,
        pattern: Some(TIME_ZONE_PATTERN.to_string()),
    };
    intl.format(date, TIME_ZONE_LOCALE, &options)
}

/// Locale independent renderings of local fields.
pub trait DateFormat: LocalCalendar {
    /// The local date as `YYYY-MM-DD`.
    fn format_iso_date(&self, date: &Instant) -> DateResult<String> {
        validate_instant(date)?;
        let pattern = "%Y-%m-%d";
        render(self.local_fields(date)?.format(pattern), pattern)
    }

    /// The local date like `Tue Oct 15 2024`.
    fn format_date_string(&self, date: &Instant) -> DateResult<String> {
        validate_instant(date)?;
        let pattern = "%a %b %d %Y";
        render(self.local_fields(date)?.format(pattern), pattern)
    }
}

impl<T: LocalCalendar> DateFormat for T {}
