// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Day record factories shaped like the conversion API payloads.

use jiff::ToSpan;
use jiff::civil::{Date, date};
use takwim_core::DayRecord;
use takwim_aladhan::{GregorianDate, HijriDate, HijriMonth, Weekday};

/// 1 Ramadan 1447 (a Wednesday).
pub const RAMADAN_1447_START: Date = date(2026, 2, 18);

/// 1 Shawwal 1447 (a Friday).
pub const SHAWWAL_1447_START: Date = date(2026, 3, 20);

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "Muḥarram",
    "Ṣafar",
    "Rabīʿ al-awwal",
    "Rabīʿ al-thānī",
    "Jumādá al-ūlá",
    "Jumādá al-ākhirah",
    "Rajab",
    "Shaʿbān",
    "Ramaḍān",
    "Shawwāl",
    "Dhū al-Qaʿdah",
    "Dhū al-Ḥijjah",
];

/// A complete record for one day, Gregorian date in `DD-MM-YYYY`.
#[must_use]
pub fn day_record(h_day: u8, h_month: u8, h_year: u16, gregorian: Date) -> DayRecord {
    let weekday = WEEKDAYS[usize::from(gregorian.weekday().to_monday_zero_offset().unsigned_abs())];
    DayRecord {
        hijri: Some(HijriDate {
            date: Some(format!("{h_day:02}-{h_month:02}-{h_year}")),
            day: Some(h_day),
            weekday: None,
            month: Some(HijriMonth {
                number: Some(h_month),
                en: Some(MONTHS[usize::from(h_month - 1)].to_string()),
                ar: None,
                days: None,
            }),
            year: Some(h_year),
            holidays: vec![],
        }),
        gregorian: Some(GregorianDate {
            date: Some(format!(
                "{:02}-{:02}-{:04}",
                gregorian.day(),
                gregorian.month(),
                gregorian.year()
            )),
            weekday: Some(Weekday {
                en: Some(weekday.to_string()),
                ar: None,
            }),
            ..Default::default()
        }),
    }
}

/// `len` consecutive day records of one Hijri month starting at `first`.
#[must_use]
pub fn month_records(h_month: u8, h_year: u16, first: Date, len: u8) -> Vec<DayRecord> {
    (1..=len)
        .map(|day| {
            let gregorian = first
                .checked_add(i32::from(day - 1).days())
                .expect("date in range");
            day_record(day, h_month, h_year, gregorian)
        })
        .collect()
}
