// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use takwim_aladhan::DayRecord;

use crate::occasion::{LabelOptions, labels_for_day};

/// One labeled calendar day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CalendarRow {
    /// Gregorian date, serialized as `YYYY-MM-DD`.
    pub gregorian: Date,

    /// English Gregorian weekday name.
    pub weekday: String,

    /// Hijri date string as delivered by the API, `DD-MM-YYYY`.
    pub hijri: String,

    /// Hijri day of month, 1..=30.
    pub h_day: u8,

    /// Hijri month number, 1..=12.
    pub h_month_num: u8,

    /// English name of the Hijri month.
    pub h_month_en: String,

    /// Occasion labels, possibly empty.
    pub labels: Vec<String>,
}

impl CalendarRow {
    /// Builds a labeled row from a conversion record.
    ///
    /// Fails when the record misses any field the row needs.
    pub fn from_record(record: &DayRecord, options: LabelOptions) -> Result<Self, RowError> {
        let hijri = record.hijri.as_ref().ok_or(RowError::Missing("hijri"))?;
        let gregorian = record
            .gregorian
            .as_ref()
            .ok_or(RowError::Missing("gregorian"))?;

        let g_date = gregorian
            .date
            .as_deref()
            .ok_or(RowError::Missing("gregorian.date"))?;
        let g_date = parse_gregorian(g_date)?;
        let weekday = gregorian
            .weekday
            .as_ref()
            .and_then(|a| a.en.clone())
            .ok_or(RowError::Missing("gregorian.weekday.en"))?;

        let h_date = hijri.date.clone().ok_or(RowError::Missing("hijri.date"))?;
        let h_day = hijri.day.ok_or(RowError::Missing("hijri.day"))?;
        let month = hijri.month.as_ref().ok_or(RowError::Missing("hijri.month"))?;
        let h_month_num = month.number.ok_or(RowError::Missing("hijri.month.number"))?;
        let h_month_en = month.en.clone().ok_or(RowError::Missing("hijri.month.en"))?;

        if !(1..=30).contains(&h_day) || !(1..=12).contains(&h_month_num) {
            return Err(RowError::OutOfRange {
                day: h_day,
                month: h_month_num,
            });
        }

        let labels = labels_for_day(h_day, h_month_num, &weekday, options);
        Ok(Self {
            gregorian: g_date,
            weekday,
            hijri: h_date,
            h_day,
            h_month_num,
            h_month_en,
            labels,
        })
    }

    /// Whether any label applies to this day.
    pub fn is_labeled(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Labels joined by `", "`, the form used in tables and CSV.
    pub fn joined_labels(&self) -> String {
        self.labels.join(", ")
    }
}

/// A conversion record that cannot become a calendar row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// A field the row needs is absent.
    #[error("missing field `{0}`")]
    Missing(&'static str),

    /// The Gregorian date is neither `YYYY-MM-DD` nor `DD-MM-YYYY`.
    #[error("invalid gregorian date `{0}`")]
    InvalidDate(String),

    /// The Hijri day or month is outside the calendar.
    #[error("hijri day {day} of month {month} is out of range")]
    OutOfRange {
        /// Reported day.
        day: u8,
        /// Reported month.
        month: u8,
    },
}

/// Parses a Gregorian date sent either as ISO `YYYY-MM-DD` or as `DD-MM-YYYY`.
pub fn parse_gregorian(s: &str) -> Result<Date, RowError> {
    let s = s.trim();
    if let Ok(date) = s.parse::<Date>() {
        return Ok(date);
    }

    let invalid = || RowError::InvalidDate(s.to_string());
    let mut parts = s.splitn(3, '-');
    let (Some(dd), Some(mm), Some(yyyy)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if dd.len() != 2 || mm.len() != 2 || yyyy.len() != 4 {
        return Err(invalid());
    }

    let day: i8 = dd.parse().map_err(|_| invalid())?;
    let month: i8 = mm.parse().map_err(|_| invalid())?;
    let year: i16 = yyyy.parse().map_err(|_| invalid())?;
    Date::new(year, month, day).map_err(|_| invalid())
}
