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

use crate::dates::{AgeMode, FormatOptions, FormatStyle, Instant, MillisSpan, TimeOfDay, TimeSpan};
use crate::json::JSON;

impl JSON for Instant {}
impl JSON for TimeSpan {}
impl JSON for MillisSpan {}
impl JSON for TimeOfDay {}
impl JSON for AgeMode {}
impl JSON for FormatStyle {}
impl JSON for FormatOptions {}
