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

//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

use serde::{Deserialize, Serialize};

use crate::error::{DateError, DateResult};

/// Handles the `to` and `from` JSON conversion of date values and options.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> DateResult<String> {
        serde_json::to_string(self).map_err(|e| DateError::Json(e.to_string()))
    }

    /// Return an indented JSON string representing the object.
    fn to_json_pretty(&self) -> DateResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DateError::Json(e.to_string()))
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> DateResult<Self> {
        serde_json::from_str(json).map_err(|e| DateError::Json(e.to_string()))
    }
}
