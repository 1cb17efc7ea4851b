// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Core library of Takwim: a Hijri calendar labeled with Islamic occasions
//! and voluntary fasting days, exportable as CSV or iCalendar.

mod builder;
mod cache;
mod config;
mod export;
mod filter;
mod grid;
mod occasion;
mod row;
mod source;
mod takwim;

pub use crate::builder::{
    BuildStatus, CalendarBuild, Issue, IssueKind, IssueScope, build_month, build_year,
};
pub use crate::cache::TtlCache;
pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::export::{
    CSV_HEADER, CsvRow, ExportError, ExportFormat, ICS_PRODID, from_csv, to_csv, to_ics,
    to_ics_at,
};
pub use crate::filter::{DEFAULT_UPCOMING_LIMIT, Upcoming, filter_rows, find_upcoming};
pub use crate::grid::{DEFAULT_MONTH_LEN, GridCell, MonthGrid};
pub use crate::occasion::{
    AYYAM_AL_BIDH_DAYS, AYYAM_AL_BIDH_LABEL, FIXED_OCCASIONS, FixedOccasion, LabelOptions,
    MONDAY_FASTING_LABEL, TASUA_LABEL, THURSDAY_FASTING_LABEL, fallback_days, fixed_occasion,
    labels_for_day,
};
pub use crate::row::{CalendarRow, RowError, parse_gregorian};
pub use crate::source::{CachedSource, ConversionSource};
pub use crate::takwim::{CalendarQuery, Takwim, Today};

pub use takwim_aladhan::{AladhanClient, AladhanConfig, AladhanError, DayRecord};
