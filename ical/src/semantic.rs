// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar and event values ready to be written.

use jiff::{Timestamp, civil::Date};

/// A `VCALENDAR` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// Product identifier, `PRODID`.
    pub prod_id: String,
    /// `VERSION`, always `2.0` for RFC 5545.
    pub version: String,
    /// Calendar scale, `CALSCALE`. Omitted when `None` (GREGORIAN implied).
    pub calscale: Option<String>,
    /// Events, written in order.
    pub events: Vec<VEvent>,
}

impl ICalendar {
    /// Creates an empty RFC 5545 calendar.
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            version: "2.0".to_string(),
            calscale: None,
            events: Vec::new(),
        }
    }
}

/// An all-day `VEVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    /// Unique identifier, `UID`.
    pub uid: String,
    /// Creation time of this representation, `DTSTAMP`. Written in UTC.
    pub dt_stamp: Timestamp,
    /// Day of the event, written as `DTSTART;VALUE=DATE`.
    pub dt_start: Date,
    /// Title, `SUMMARY`.
    pub summary: Option<String>,
    /// Free text, `DESCRIPTION`. Newlines are kept.
    pub description: Option<String>,
}

impl VEvent {
    /// Creates an event on `dt_start` with no text properties.
    pub fn new(uid: impl Into<String>, dt_stamp: Timestamp, dt_start: Date) -> Self {
        Self {
            uid: uid.into(),
            dt_stamp,
            dt_start,
            summary: None,
            description: None,
        }
    }
}
