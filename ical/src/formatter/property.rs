// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting, one content line per property.

use std::io::{self, Write};

use jiff::{Timestamp, civil::Date};

use crate::formatter::Formatter;
use crate::keyword::{KW_DATE, KW_VALUE};

/// Writes `NAME:value` with the value as is.
pub fn write_prop_value<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    value: &str,
) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Writes a TEXT property, escaping the value.
pub fn write_prop_text<W: Write>(f: &mut Formatter<W>, name: &str, text: &str) -> io::Result<()> {
    write!(f, "{name}:{}", format_value_text(text))?;
    f.writeln()
}

/// Writes `NAME;VALUE=DATE:YYYYMMDD`.
pub fn write_prop_date<W: Write>(f: &mut Formatter<W>, name: &str, date: Date) -> io::Result<()> {
    write!(f, "{name};{KW_VALUE}={KW_DATE}:{}", date.strftime("%Y%m%d"))?;
    f.writeln()
}

/// Writes a UTC date-time, `NAME:YYYYMMDDTHHMMSSZ`.
pub fn write_prop_timestamp<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    timestamp: Timestamp,
) -> io::Result<()> {
    write!(f, "{name}:{}", timestamp.strftime("%Y%m%dT%H%M%SZ"))?;
    f.writeln()
}

/// Escapes a TEXT value (RFC 5545, section 3.3.11).
fn format_value_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            c => result.push(c),
        }
    }
    result
}
