// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use takwim_core::{DEFAULT_UPCOMING_LIMIT, LabelOptions, Takwim};

use crate::arg::{CommonArgs, LabelArgs, PeriodArgs};
use crate::row_formatter::RowFormatter;
use crate::util::{OutputFormat, report_issues, resolve_year};

#[derive(Debug, Clone, Copy)]
pub struct CmdUpcoming {
    pub year: Option<u16>,
    pub limit: usize,
    pub labels: LabelArgs,
    pub output_format: OutputFormat,
}

impl CmdUpcoming {
    pub const NAME: &str = "upcoming";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("next")
            .about("List the next labeled days, starting today")
            .arg(PeriodArgs::year())
            .arg(
                arg!(-n --limit <N> "How many days to list")
                    .value_parser(value_parser!(usize))
                    .default_value("5"),
            )
            .args(LabelArgs::args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: PeriodArgs::get_year(matches),
            limit: matches
                .get_one("limit")
                .copied()
                .unwrap_or(DEFAULT_UPCOMING_LIMIT),
            labels: LabelArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, takwim: &Takwim) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing upcoming days...");
        let year = resolve_year(takwim, self.year).await?;
        let options = self.labels.options(takwim.label_options());
        let formatter = RowFormatter::upcoming().with_output_format(self.output_format);
        Self::list(takwim, year, options, self.limit, &formatter).await
    }

    pub async fn list(
        takwim: &Takwim,
        year: u16,
        options: LabelOptions,
        limit: usize,
        formatter: &RowFormatter,
    ) -> Result<(), Box<dyn Error>> {
        let (upcoming, issues) = takwim.upcoming(year, options, limit).await;
        report_issues(&issues);

        if upcoming.is_empty() && formatter.is_table() {
            println!("No upcoming occasions");
        } else {
            print!("{}", formatter.format(&upcoming));
        }
        Ok(())
    }
}
