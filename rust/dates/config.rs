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

//! Default values shared by the date operations.

use crate::dates::AgeMode;

/// Locale tag used by [`format_locale`](crate::dates::host::format_locale) when none is given.
pub const DEFAULT_LOCALE: &str = "ko-KR";

/// Fixed locale tag used when rendering in an explicit IANA time zone.
pub const TIME_ZONE_LOCALE: &str = "en-US";

/// Pattern used when rendering in an explicit IANA time zone, e.g. `10/15/2024, 09:30:00 PM`.
pub const TIME_ZONE_PATTERN: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Monday.
pub const DEFAULT_FIRST_DAY_OF_WEEK: i32 = 1;

/// Sunday.
pub const DEFAULT_LAST_DAY_OF_WEEK: i32 = 0;

/// Age convention used by [`age`](crate::dates::host::age) when none is given.
pub const DEFAULT_AGE_MODE: AgeMode = AgeMode::Korean;

/// First (UTC) year rejected by [`validate_instant`](crate::dates::validate_instant).
pub const MAX_YEAR: i32 = 3000;

/// Milliseconds since the epoch of 3000-01-01T00:00:00Z.
pub const MAX_YEAR_MILLIS: i64 = 32_503_680_000_000;

/// Largest magnitude accepted for a signed year offset.
pub const MAX_YEAR_OFFSET: i32 = 9_999;

/// Largest magnitude accepted for a signed month offset.
pub const MAX_MONTH_OFFSET: i32 = MAX_YEAR_OFFSET * 12;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
