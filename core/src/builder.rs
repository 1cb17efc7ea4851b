// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use takwim_aladhan::AladhanError;

use crate::occasion::{LabelOptions, fallback_days};
use crate::row::{CalendarRow, RowError};
use crate::source::ConversionSource;

/// Rows of a Hijri year or month, plus everything that went wrong on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarBuild {
    /// Rows sorted by Gregorian date.
    pub rows: Vec<CalendarRow>,

    /// Problems met while fetching; the affected days are absent from `rows`.
    pub issues: Vec<Issue>,

    /// Months that were synthesized from single-date lookups.
    pub fallback_months: Vec<u8>,
}

impl CalendarBuild {
    /// Overall outcome of the build.
    pub fn status(&self) -> BuildStatus {
        let failed = self
            .issues
            .iter()
            .any(|a| a.kind != IssueKind::NoData);

        match (self.rows.is_empty(), self.issues.is_empty()) {
            (false, true) => BuildStatus::Complete,
            (false, false) => BuildStatus::Partial,
            (true, _) if failed => BuildStatus::Unavailable,
            (true, _) => BuildStatus::Empty,
        }
    }

    fn extend(&mut self, other: CalendarBuild) {
        self.rows.extend(other.rows);
        self.issues.extend(other.issues);
        self.fallback_months.extend(other.fallback_months);
    }

    fn sort(&mut self) {
        self.rows.sort_by_key(|a| a.gregorian);
    }
}

/// Outcome of a calendar build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    /// All requested data arrived.
    Complete,
    /// Some rows arrived, some days are missing.
    Partial,
    /// Nothing arrived and the source had nothing for the period.
    Empty,
    /// Nothing arrived because fetching failed or the period is invalid.
    Unavailable,
}

/// A problem met while building the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// What the problem affects.
    pub scope: IssueScope,
    /// Class of the problem.
    pub kind: IssueKind,
    /// Human-readable detail.
    pub message: String,
}

impl Issue {
    fn from_error(scope: IssueScope, error: &AladhanError) -> Self {
        let kind = match error {
            e if e.is_unavailable() => IssueKind::UpstreamUnavailable,
            AladhanError::NotFound(_) => IssueKind::NoData,
            AladhanError::Config(_) => IssueKind::InvalidRequest,
            _ => IssueKind::UnexpectedPayload,
        };
        Self {
            scope,
            kind,
            message: error.to_string(),
        }
    }

    fn from_row_error(scope: IssueScope, error: &RowError) -> Self {
        Self {
            scope,
            kind: IssueKind::UnexpectedPayload,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

/// Part of the calendar an [`Issue`] affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueScope {
    /// A whole Hijri month.
    Month {
        /// Hijri year.
        year: u16,
        /// Hijri month.
        month: u8,
    },
    /// A single Hijri day.
    Day {
        /// Hijri year.
        year: u16,
        /// Hijri month.
        month: u8,
        /// Hijri day.
        day: u8,
    },
}

impl fmt::Display for IssueScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "H{year}/{month}"),
            Self::Day { year, month, day } => write!(f, "{day:02}-{month:02}-{year} H"),
        }
    }
}

/// Class of an [`Issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Network failure, timeout, or an error answer.
    UpstreamUnavailable,
    /// The answer did not have the expected shape.
    UnexpectedPayload,
    /// The source has nothing for the period.
    NoData,
    /// The period itself is invalid, e.g. month 13; nothing was fetched.
    InvalidRequest,
}

/// Builds the labeled calendar of a whole Hijri year.
///
/// The twelve months are fetched one after another; rows come back sorted by
/// Gregorian date.
pub async fn build_year<S>(source: &S, year: u16, options: LabelOptions) -> CalendarBuild
where
    S: ConversionSource + ?Sized,
{
    let mut build = CalendarBuild::default();
    for month in 1..=12 {
        build.extend(fetch_month(source, year, month, options).await);
    }
    build.sort();
    build
}

/// Builds the labeled calendar of a single Hijri month.
pub async fn build_month<S>(source: &S, year: u16, month: u8, options: LabelOptions) -> CalendarBuild
where
    S: ConversionSource + ?Sized,
{
    let mut build = fetch_month(source, year, month, options).await;
    build.sort();
    build
}

/// Fetches one month, falling back to single-date lookups of the days that
/// can carry a label when the month table is missing, empty or failing.
///
/// Never fails: every problem becomes an [`Issue`] and the affected days are
/// left out.
#[tracing::instrument(skip(source, options))]
async fn fetch_month<S>(source: &S, year: u16, month: u8, options: LabelOptions) -> CalendarBuild
where
    S: ConversionSource + ?Sized,
{
    let mut build = CalendarBuild::default();
    let scope = IssueScope::Month { year, month };

    if !(1..=12).contains(&month) {
        build.issues.push(Issue {
            scope,
            kind: IssueKind::InvalidRequest,
            message: format!("Hijri month must be within 1..=12, got {month}"),
        });
        return build;
    }

    match source.hijri_month(year, month).await {
        Ok(records) if !records.is_empty() => {
            for record in &records {
                match CalendarRow::from_record(record, options) {
                    Ok(row) => build.rows.push(row),
                    Err(e) => {
                        tracing::warn!(%e, "dropping malformed day record");
                        build.issues.push(Issue::from_row_error(scope, &e));
                    }
                }
            }
            return build;
        }
        Ok(_) => build.issues.push(Issue {
            scope,
            kind: IssueKind::NoData,
            message: "empty month table".to_string(),
        }),
        Err(e) => {
            tracing::warn!(%e, "month table unavailable, falling back to single dates");
            build.issues.push(Issue::from_error(scope, &e));
        }
    }

    build.fallback_months.push(month);
    for day in fallback_days(month) {
        let scope = IssueScope::Day { year, month, day };
        match source.hijri_day(day, month, year).await {
            Ok(record) => match CalendarRow::from_record(&record, options) {
                Ok(row) => build.rows.push(row),
                Err(e) => {
                    tracing::warn!(%scope, %e, "dropping malformed day record");
                    build.issues.push(Issue::from_row_error(scope, &e));
                }
            },
            Err(e) => {
                tracing::warn!(%scope, %e, "dropping day");
                build.issues.push(Issue::from_error(scope, &e));
            }
        }
    }
    build
}
