// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use takwim_core::{BuildStatus, CalendarQuery, Takwim};

use crate::arg::{CommonArgs, LabelArgs, PeriodArgs};
use crate::row_formatter::RowFormatter;
use crate::util::{OutputFormat, check_build, resolve_year};

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub only_labeled: bool,
    pub labels: LabelArgs,
    pub output_format: OutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the labeled Hijri calendar of a year or month")
            .arg(PeriodArgs::year())
            .arg(PeriodArgs::month())
            .arg(PeriodArgs::only_labeled())
            .args(LabelArgs::args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: PeriodArgs::get_year(matches),
            month: PeriodArgs::get_month(matches),
            only_labeled: PeriodArgs::get_only_labeled(matches),
            labels: LabelArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, takwim: &Takwim) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "building calendar...");
        let query = CalendarQuery {
            year: resolve_year(takwim, self.year).await?,
            month: self.month,
            only_labeled: self.only_labeled,
            options: self.labels.options(takwim.label_options()),
        };

        let build = takwim.calendar(&query).await;
        let period = period_name(&query);
        check_build(&build, &period)?;

        if build.rows.is_empty() && self.output_format == OutputFormat::Table {
            match build.status() {
                BuildStatus::Empty => println!("No calendar data for {period}"),
                _ => println!("No labeled days in {period}"),
            }
            return Ok(());
        }

        let formatter = RowFormatter::calendar().with_output_format(self.output_format);
        print!("{}", formatter.format(&build.rows));
        Ok(())
    }
}

/// `H1447` or `H1447/9`.
pub fn period_name(query: &CalendarQuery) -> String {
    match query.month {
        Some(month) => format!("H{}/{month}", query.year),
        None => format!("H{}", query.year),
    }
}
