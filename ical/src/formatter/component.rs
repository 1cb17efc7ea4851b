// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting: `VCALENDAR` and `VEVENT` blocks.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::property::{
    write_prop_date, write_prop_text, write_prop_timestamp, write_prop_value,
};
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_DESCRIPTION, KW_DTSTAMP, KW_DTSTART, KW_END, KW_PRODID,
    KW_SUMMARY, KW_UID, KW_VCALENDAR, KW_VERSION, KW_VEVENT,
};
use crate::semantic::{ICalendar, VEvent};

/// Format an `ICalendar` object.
pub fn write_icalendar<W: Write>(f: &mut Formatter<W>, calendar: &ICalendar) -> io::Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        write_prop_value(f, KW_VERSION, &calendar.version)?;
        write_prop_text(f, KW_PRODID, &calendar.prod_id)?;
        if let Some(calscale) = &calendar.calscale {
            write_prop_value(f, KW_CALSCALE, calscale)?;
        }

        for event in &calendar.events {
            write_vevent(f, event)?;
        }
        Ok(())
    })
}

fn write_vevent<W: Write>(f: &mut Formatter<W>, event: &VEvent) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        write_prop_text(f, KW_UID, &event.uid)?;
        write_prop_timestamp(f, KW_DTSTAMP, event.dt_stamp)?;
        write_prop_date(f, KW_DTSTART, event.dt_start)?;

        if let Some(summary) = &event.summary {
            write_prop_text(f, KW_SUMMARY, summary)?;
        }
        if let Some(description) = &event.description {
            write_prop_text(f, KW_DESCRIPTION, description)?;
        }
        Ok(())
    })
}

fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}
