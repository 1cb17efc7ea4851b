// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::row::CalendarRow;

/// Number of upcoming occasions shown by default.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Keeps the rows of one Hijri month (if given) and, when `only_labeled` is
/// set, only the rows carrying a label.
pub fn filter_rows<'a, I>(rows: I, only_labeled: bool, month: Option<u8>) -> Vec<CalendarRow>
where
    I: IntoIterator<Item = &'a CalendarRow>,
{
    rows.into_iter()
        .filter(|a| month.is_none_or(|m| a.h_month_num == m))
        .filter(|a| !only_labeled || a.is_labeled())
        .cloned()
        .collect()
}

/// A labeled day that has not passed yet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Upcoming {
    /// The labeled day.
    #[serde(flatten)]
    pub row: CalendarRow,

    /// Days from the reference date, 0 for the same day.
    pub days_left: i64,
}

/// Labeled rows on or after `from`, earliest first, at most `limit` of them.
pub fn find_upcoming<'a, I>(rows: I, from: Date, limit: usize) -> Vec<Upcoming>
where
    I: IntoIterator<Item = &'a CalendarRow>,
{
    let mut upcoming: Vec<_> = rows
        .into_iter()
        .filter(|a| a.is_labeled() && a.gregorian >= from)
        .map(|a| Upcoming {
            row: a.clone(),
            days_left: from.duration_until(a.gregorian).as_hours() / 24,
        })
        .collect();

    upcoming.sort_by_key(|a| a.row.gregorian);
    upcoming.truncate(limit);
    upcoming
}
