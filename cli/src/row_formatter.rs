// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use takwim_core::{CalendarRow, Upcoming};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};
use crate::util::OutputFormat;

/// Anything shown as a calendar line.
pub trait AsCalendarRow: serde::Serialize {
    fn row(&self) -> &CalendarRow;

    fn days_left(&self) -> Option<i64> {
        None
    }
}

impl AsCalendarRow for CalendarRow {
    fn row(&self) -> &CalendarRow {
        self
    }
}

impl AsCalendarRow for Upcoming {
    fn row(&self) -> &CalendarRow {
        &self.row
    }

    fn days_left(&self) -> Option<i64> {
        Some(self.days_left)
    }
}

#[derive(Debug)]
pub struct RowFormatter {
    columns: Vec<RowColumn>,
    format: OutputFormat,
}

impl RowFormatter {
    pub fn new(columns: Vec<RowColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn calendar() -> Self {
        Self::new(vec![
            RowColumn::Gregorian,
            RowColumn::Weekday,
            RowColumn::Hijri,
            RowColumn::Month,
            RowColumn::Labels,
        ])
    }

    pub fn upcoming() -> Self {
        Self::new(vec![
            RowColumn::DaysLeft,
            RowColumn::Gregorian,
            RowColumn::Weekday,
            RowColumn::Hijri,
            RowColumn::Labels,
        ])
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }

    pub fn format<'a, R: AsCalendarRow>(&'a self, rows: &'a [R]) -> Display<'a, R> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a, R> {
    rows: &'a [R],
    formatter: &'a RowFormatter,
}

impl<R: AsCalendarRow> fmt::Display for Display<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.rows).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColumn {
    Gregorian,
    Weekday,
    Hijri,
    Month,
    Labels,
    DaysLeft,
}

impl<R: AsCalendarRow> TableColumn<R> for RowColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            RowColumn::Gregorian => "Date",
            RowColumn::Weekday => "Weekday",
            RowColumn::Hijri => "Hijri",
            RowColumn::Month => "Month",
            RowColumn::Labels => "Labels",
            RowColumn::DaysLeft => "In",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a R) -> Cow<'a, str> {
        let row = data.row();
        match self {
            RowColumn::Gregorian => row.gregorian.to_string().into(),
            RowColumn::Weekday => row.weekday.as_str().into(),
            RowColumn::Hijri => row.hijri.as_str().into(),
            RowColumn::Month => row.h_month_en.as_str().into(),
            RowColumn::Labels => row.joined_labels().into(),
            RowColumn::DaysLeft => match data.days_left() {
                Some(0) => "today".into(),
                Some(1) => "1 day".into(),
                Some(n) => format!("{n} days").into(),
                None => "".into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            RowColumn::DaysLeft => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &R) -> Option<Color> {
        match self {
            RowColumn::Labels if data.row().is_labeled() => Some(Color::Green),
            RowColumn::DaysLeft if data.days_left() == Some(0) => Some(Color::Yellow),
            _ => None,
        }
    }
}
