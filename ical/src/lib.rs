// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Write iCalendar (RFC 5545) calendars of all-day events.

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

pub mod formatter;
pub mod keyword;
pub mod semantic;

pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
pub use crate::semantic::{ICalendar, VEvent};
