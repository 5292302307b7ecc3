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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elapsed time decomposed into whole hours and the remaining minutes and seconds.
///
/// There is no day component: a span of 50 hours has `hours == 50`. Negative spans keep
/// their sign in every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Elapsed time expressed at three precisions.
///
/// The fields are not independent components: `seconds` is `milliseconds / 1000` and
/// `minutes` is `seconds / 60`, each at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MillisSpan {
    pub milliseconds: f64,
    pub seconds: f64,
    pub minutes: f64,
}

/// Period of the day by local hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 16:59.
    Afternoon,
    /// 17:00 to 20:59.
    Evening,
    /// 21:00 to 04:59.
    Night,
}

impl TimeOfDay {
    /// Bucket a local hour in `0..24`.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        };
        f.write_str(s)
    }
}

/// Convention for counting age.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeMode {
    /// Korean age: the international age plus one, counting the birth year as age 1.
    Korean,
    /// Completed years since birth.
    International,
}

impl From<&str> for AgeMode {
    /// `"kr"` (any case) selects [`AgeMode::Korean`]; every other value is international.
    fn from(item: &str) -> Self {
        if item.eq_ignore_ascii_case("kr") {
            AgeMode::Korean
        } else {
            AgeMode::International
        }
    }
}

impl FromStr for AgeMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AgeMode::from(s))
    }
}
