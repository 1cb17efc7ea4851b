// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

/// An occasion that always falls on the same Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOccasion {
    /// Day of the Hijri month.
    pub day: u8,
    /// Hijri month number, 1 is Muharram.
    pub month: u8,
    /// Display label.
    pub label: &'static str,
}

const fn fixed(day: u8, month: u8, label: &'static str) -> FixedOccasion {
    FixedOccasion { day, month, label }
}

/// Occasions on fixed Hijri dates. Each (day, month) appears once.
pub const FIXED_OCCASIONS: &[FixedOccasion] = &[
    // Ramadan
    fixed(1, 9, "Awal Ramadhan"),
    fixed(17, 9, "Nuzulul Qur'an"),
    // Rajab
    fixed(27, 7, "Isra' Mi'raj"),
    // Rabi' al-Awwal
    fixed(12, 3, "Maulid Nabi"),
    // Shawwal
    fixed(1, 10, "Idul Fitri"),
    // Dhu al-Hijjah
    fixed(8, 12, "Tarwiyah"),
    fixed(9, 12, "Arafah"),
    fixed(10, 12, "Idul Adha"),
    // Muharram
    fixed(10, 1, "Asyura (10 Muharram)"),
    fixed(9, 1, TASUA_LABEL),
];

/// Label of the 9th of Muharram, which can be switched off.
pub const TASUA_LABEL: &str = "Tasu'a (9 Muharram)";

/// Label of the white days.
pub const AYYAM_AL_BIDH_LABEL: &str = "Ayyam al-Bidh (13–15)";

/// Days of every Hijri month that are white days.
pub const AYYAM_AL_BIDH_DAYS: [u8; 3] = [13, 14, 15];

/// Label of Monday fasting.
pub const MONDAY_FASTING_LABEL: &str = "Puasa Senin";

/// Label of Thursday fasting.
pub const THURSDAY_FASTING_LABEL: &str = "Puasa Kamis";

/// Toggles for the optional labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOptions {
    /// Mark Monday and Thursday as voluntary fasting days.
    pub weekday_fasting: bool,

    /// Mark the 9th of Muharram.
    pub tasua: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            weekday_fasting: true,
            tasua: true,
        }
    }
}

/// Looks up the fixed occasion of a Hijri date.
pub fn fixed_occasion(day: u8, month: u8) -> Option<&'static FixedOccasion> {
    FIXED_OCCASIONS
        .iter()
        .find(|a| a.day == day && a.month == month)
}

/// Returns the labels of one day, in display order: the fixed occasion, the
/// white days, then weekday fasting.
///
/// `weekday` is the English Gregorian weekday name, e.g. `Monday`.
pub fn labels_for_day(day: u8, month: u8, weekday: &str, options: LabelOptions) -> Vec<String> {
    let mut labels = Vec::with_capacity(3);

    if let Some(occasion) = fixed_occasion(day, month) {
        if options.tasua || occasion.label != TASUA_LABEL {
            labels.push(occasion.label.to_string());
        }
    }

    if AYYAM_AL_BIDH_DAYS.contains(&day) {
        labels.push(AYYAM_AL_BIDH_LABEL.to_string());
    }

    if options.weekday_fasting {
        match weekday.trim() {
            "Monday" => labels.push(MONDAY_FASTING_LABEL.to_string()),
            "Thursday" => labels.push(THURSDAY_FASTING_LABEL.to_string()),
            _ => {}
        }
    }

    labels
}

/// Days worth probing one by one when a whole month cannot be fetched: the
/// fixed occasions of that month and the white days.
pub fn fallback_days(month: u8) -> BTreeSet<u8> {
    FIXED_OCCASIONS
        .iter()
        .filter(|a| a.month == month)
        .map(|a| a.day)
        .chain(AYYAM_AL_BIDH_DAYS)
        .collect()
}
