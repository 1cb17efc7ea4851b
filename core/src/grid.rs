// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use crate::row::CalendarRow;

/// Length assumed for a Hijri month whose last day is unknown.
pub const DEFAULT_MONTH_LEN: u8 = 30;

/// A day in a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Hijri day of month.
    pub day: u8,
    /// Whether the day carries a label.
    pub marked: bool,
}

/// A Hijri month laid out in Monday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    weeks: Vec<[Option<GridCell>; 7]>,
}

impl MonthGrid {
    /// Lays out `month_len` days starting at column `first_weekday`
    /// (0 is Monday, taken modulo 7) and pads the last week.
    pub fn new(month_len: u8, first_weekday: u8, marked: &BTreeSet<u8>) -> Self {
        let offset = usize::from(first_weekday % 7);
        let cells: Vec<Option<GridCell>> = std::iter::repeat_n(None, offset)
            .chain((1..=month_len).map(|day| {
                Some(GridCell {
                    day,
                    marked: marked.contains(&day),
                })
            }))
            .collect();

        let weeks = cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect();
        Self { weeks }
    }

    /// Lays out one month from its rows. The first weekday is derived from any
    /// row, the length from the last day seen (at least 29, 30 when unsure).
    /// Returns `None` when no row belongs to the month.
    pub fn from_rows(rows: &[CalendarRow], month: u8) -> Option<Self> {
        let rows: Vec<_> = rows.iter().filter(|a| a.h_month_num == month).collect();
        let anchor = rows.first()?;

        let weekday = i32::from(anchor.gregorian.weekday().to_monday_zero_offset());
        let first_weekday = (weekday - (i32::from(anchor.h_day) - 1)).rem_euclid(7);

        let last_day = rows.iter().map(|a| a.h_day).max().unwrap_or(DEFAULT_MONTH_LEN);
        let month_len = if rows.len() >= 29 && last_day >= 29 {
            last_day
        } else {
            DEFAULT_MONTH_LEN
        };

        let marked = rows
            .iter()
            .filter(|a| a.is_labeled())
            .map(|a| a.h_day)
            .collect();

        // rem_euclid(7) is within 0..7
        let first_weekday = u8::try_from(first_weekday).unwrap_or_default();
        Some(Self::new(month_len, first_weekday, &marked))
    }

    /// Weeks of seven cells, `None` for padding.
    pub fn weeks(&self) -> &[[Option<GridCell>; 7]] {
        &self.weeks
    }
}
