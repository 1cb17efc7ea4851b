// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

#![allow(missing_docs)]

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";

// Calendar properties
pub const KW_VERSION: &str = "VERSION";
pub const KW_PRODID: &str = "PRODID";
pub const KW_CALSCALE: &str = "CALSCALE";

// Event properties
pub const KW_UID: &str = "UID";
pub const KW_DTSTAMP: &str = "DTSTAMP";
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_SUMMARY: &str = "SUMMARY";
pub const KW_DESCRIPTION: &str = "DESCRIPTION";

// Parameters
pub const KW_VALUE: &str = "VALUE";
pub const KW_DATE: &str = "DATE";
