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

//! This is the documentation for datekit
//!
//! *datekit* is a stateless date utility library. The [`dates`] module contains every
//! operation; all of them validate their inputs first and return a [`DateResult`].

#[cfg(test)]
mod tests;

pub mod error;
pub use crate::error::{DateError, DateResult};

pub mod json;
pub use crate::json::JSON;

pub mod dates;
