// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer};

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Status code echoed in the body, 200 on success.
    pub code: u16,
    /// Status text, `OK` on success.
    #[serde(default)]
    pub status: String,
    /// Endpoint payload.
    pub data: T,
}

/// One converted day: the Hijri and the Gregorian side of the same date.
///
/// Both sides are kept loose so that a single malformed record can be
/// rejected by the caller without failing the whole month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DayRecord {
    /// Hijri side of the record.
    #[serde(default)]
    pub hijri: Option<HijriDate>,
    /// Gregorian side of the record.
    #[serde(default)]
    pub gregorian: Option<GregorianDate>,
}

/// Hijri date as described by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HijriDate {
    /// Date string, `DD-MM-YYYY`.
    #[serde(default)]
    pub date: Option<String>,
    /// Day of month.
    #[serde(default, deserialize_with = "lenient")]
    pub day: Option<u8>,
    /// Weekday names.
    #[serde(default)]
    pub weekday: Option<Weekday>,
    /// Month metadata.
    #[serde(default)]
    pub month: Option<HijriMonth>,
    /// Hijri year.
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<u16>,
    /// Holidays reported by the API for this day.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Hijri month metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HijriMonth {
    /// Month number, 1 is Muharram.
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u8>,
    /// English transliteration.
    #[serde(default)]
    pub en: Option<String>,
    /// Arabic name.
    #[serde(default)]
    pub ar: Option<String>,
    /// Length of the month in days, when reported.
    #[serde(default, deserialize_with = "lenient")]
    pub days: Option<u8>,
}

/// Gregorian date as described by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GregorianDate {
    /// Date string, usually `DD-MM-YYYY`.
    #[serde(default)]
    pub date: Option<String>,
    /// Day of month.
    #[serde(default, deserialize_with = "lenient")]
    pub day: Option<u8>,
    /// Weekday names.
    #[serde(default)]
    pub weekday: Option<Weekday>,
    /// Month metadata.
    #[serde(default)]
    pub month: Option<GregorianMonth>,
    /// Gregorian year.
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i16>,
}

/// Gregorian month metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GregorianMonth {
    /// Month number, 1 is January.
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u8>,
    /// English name.
    #[serde(default)]
    pub en: Option<String>,
}

/// Weekday names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Weekday {
    /// English name (on the Hijri side, an English transliteration).
    #[serde(default)]
    pub en: Option<String>,
    /// Arabic name.
    #[serde(default)]
    pub ar: Option<String>,
}

/// Formats a date the way the single-date endpoints expect it, `DD-MM-YYYY`.
#[must_use]
pub fn format_dmy(date: Date) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// Accepts numbers sent either as JSON numbers or as strings such as `"01"`.
/// Anything else becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Num(T),
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw<T>>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}
