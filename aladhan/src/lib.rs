// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Aladhan Hijri/Gregorian conversion API.
//!
//! Three endpoints are covered: the Hijri month calendar
//! (`/hToGCalendar/{year}/{month}`) and the two single-date conversions
//! (`/hToG` and `/gToH`, both keyed by a `DD-MM-YYYY` string).

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::single_match_else, clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::AladhanClient;
pub use crate::config::AladhanConfig;
pub use crate::error::AladhanError;
pub use crate::types::{
    DayRecord, Envelope, GregorianDate, GregorianMonth, HijriDate, HijriMonth, Weekday,
    format_dmy,
};
