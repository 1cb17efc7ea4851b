// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter.
//!
//! Content lines are buffered and folded on the way out, so that no physical
//! line is longer than the configured number of octets.
//!
//! # Example
//!
//! ```
//! use jiff::{Timestamp, civil::date};
//! use takwim_ical::{ICalendar, VEvent, format};
//!
//! let mut calendar = ICalendar::new("-//Example//EN");
//! let mut event = VEvent::new("1", Timestamp::UNIX_EPOCH, date(2025, 3, 31));
//! event.summary = Some("Idul Fitri".to_string());
//! calendar.events.push(event);
//!
//! let ics = format(&calendar).unwrap();
//! assert!(ics.contains("\r\nSUMMARY:Idul Fitri\r\n"));
//! ```

mod component;
mod property;

use std::io::{self, Write};

use crate::formatter::component::write_icalendar;
use crate::semantic::ICalendar;

/// Formats a calendar to a `String` with the default options.
///
/// # Errors
///
/// Returns an error if the output contains invalid UTF-8 data.
pub fn format(calendar: &ICalendar) -> io::Result<String> {
    FormatOptions::default().write_to_string(calendar)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding, `None` to never fold.
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Writes a calendar to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, calendar: &ICalendar, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter::new(w, *self);
        formatter.write_calendar(calendar)?;
        formatter.flush()
    }

    /// Writes a calendar to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, calendar: &ICalendar) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style: CRLF followed by a SPACE or a TAB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Octets the whitespace after CRLF takes on a continuation line.
    const fn continuation_len() -> usize {
        1
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Bytes written through [`Write`] form the current content line; the line
/// is folded and terminated by CRLF when it ends.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// The content line being written, not yet folded.
    line: Vec<u8>,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line: Vec::new(),
        }
    }

    /// Consumes this formatter, returning the underlying writer.
    ///
    /// A content line that was never ended is dropped.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a whole `VCALENDAR` object.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_calendar(&mut self, calendar: &ICalendar) -> io::Result<()> {
        write_icalendar(self, calendar)
    }

    /// Ends the current content line: folds it and writes it with CRLF.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.line);
        let line = String::from_utf8(line)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        match self.options.folding {
            Some(max_len) => self.write_folded(&line, max_len)?,
            None => self.writer.write_all(line.as_bytes())?,
        }
        self.writer.write_all(b"\r\n")
    }

    fn write_folded(&mut self, line: &str, max_len: usize) -> io::Result<()> {
        let mut line_length = 0;
        for unit in fold_units(line) {
            // a unit longer than a whole line is written as is
            if line_length + unit.len() > max_len
                && line_length > FoldingStyle::continuation_len()
            {
                self.writer
                    .write_all(self.options.folding_style.as_bytes())?;
                line_length = FoldingStyle::continuation_len();
            }
            self.writer.write_all(unit.as_bytes())?;
            line_length += unit.len();
        }
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Splits a content line into the pieces a fold may not cut: whole UTF-8
/// characters, and escape sequences such as `\,` or `\n`.
fn fold_units(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let end = match (first, chars.next()) {
            ('\\', Some((i, c))) => i + c.len_utf8(),
            (_, Some((i, _))) => i,
            (_, None) => rest.len(),
        };
        let (unit, tail) = rest.split_at(end);
        rest = tail;
        Some(unit)
    })
}
