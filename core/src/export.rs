// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! CSV and iCalendar renditions of calendar rows.

use std::{fmt, io};

use jiff::Timestamp;
use takwim_ical::{ICalendar, VEvent};

use crate::row::CalendarRow;

/// Header of the CSV export.
pub const CSV_HEADER: [&str; 7] = [
    "gregorian",
    "weekday",
    "hijri",
    "h_day",
    "h_month_num",
    "h_month_en",
    "labels",
];

/// Product identifier written to iCalendar files.
pub const ICS_PRODID: &str = "-//Takwim//Hijri Calendar//EN";

/// Export file formats.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one line per day.
    Csv,
    /// iCalendar, one all-day event per labeled day.
    Ics,
}

impl ExportFormat {
    /// Usual file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Ics => "ics",
        }
    }

    /// Renders rows in this format.
    pub fn render(self, rows: &[CalendarRow]) -> Result<String, ExportError> {
        match self {
            Self::Csv => to_csv(rows),
            Self::Ics => to_ics(rows),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Failure to write an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The output is not valid UTF-8.
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Flushing the CSV buffer failed.
    #[error("CSV buffer error: {0}")]
    Buffer(String),

    /// The iCalendar writer failed.
    #[error("iCalendar error: {0}")]
    Ics(#[from] io::Error),
}

/// One CSV line. Labels are joined with `", "` into a single field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CsvRow {
    /// Gregorian date, `YYYY-MM-DD`.
    pub gregorian: String,
    /// English weekday name.
    pub weekday: String,
    /// Hijri date, `DD-MM-YYYY`.
    pub hijri: String,
    /// Hijri day of month.
    pub h_day: u8,
    /// Hijri month number.
    pub h_month_num: u8,
    /// English Hijri month name.
    pub h_month_en: String,
    /// Joined labels.
    pub labels: String,
}

impl From<&CalendarRow> for CsvRow {
    fn from(row: &CalendarRow) -> Self {
        Self {
            gregorian: row.gregorian.to_string(),
            weekday: row.weekday.clone(),
            hijri: row.hijri.clone(),
            h_day: row.h_day,
            h_month_num: row.h_month_num,
            h_month_en: row.h_month_en.clone(),
            labels: row.joined_labels(),
        }
    }
}

/// Writes every row as CSV, header included.
pub fn to_csv(rows: &[CalendarRow]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // written by hand so that an empty export still carries the header
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(CsvRow::from(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Reads CSV written by [`to_csv`].
pub fn from_csv(data: &str) -> Result<Vec<CsvRow>, ExportError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let rows = reader.deserialize().collect::<Result<Vec<CsvRow>, _>>()?;
    Ok(rows)
}

/// Writes labeled rows as iCalendar all-day events, stamped now.
///
/// The first label becomes the summary; all labels and the Hijri date go to
/// the description. Unlabeled rows are skipped. Lines end with CRLF and are
/// folded at 75 octets.
pub fn to_ics(rows: &[CalendarRow]) -> Result<String, ExportError> {
    to_ics_at(rows, Timestamp::now())
}

/// Like [`to_ics`], with `DTSTAMP` set to `stamp`.
pub fn to_ics_at(rows: &[CalendarRow], stamp: Timestamp) -> Result<String, ExportError> {
    let mut calendar = ICalendar::new(ICS_PRODID);
    calendar.events = rows.iter().filter_map(|row| event(row, stamp)).collect();
    Ok(takwim_ical::format(&calendar)?)
}

fn event(row: &CalendarRow, stamp: Timestamp) -> Option<VEvent> {
    let summary = row.labels.first()?;
    let uid = format!(
        "{}-{}-{}",
        row.gregorian.strftime("%Y%m%d"),
        summary.replace(' ', ""),
        row.hijri
    );

    let mut event = VEvent::new(uid, stamp, row.gregorian);
    event.summary = Some(summary.clone());
    event.description = Some(format!(
        "Hijri: {} ({})\nLabels: {}",
        row.hijri,
        row.h_month_en,
        row.joined_labels()
    ));
    Some(event)
}
