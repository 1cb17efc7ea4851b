// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Write},
};

use clap::{ArgMatches, Command};
use colored::Colorize;
use takwim_core::{CalendarQuery, CalendarRow, MonthGrid, Takwim};

use crate::arg::{LabelArgs, PeriodArgs};
use crate::cmd_calendar::period_name;
use crate::util::check_build;

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

#[derive(Debug, Clone)]
pub struct CmdGrid {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub labels: LabelArgs,
}

impl CmdGrid {
    pub const NAME: &str = "grid";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show one Hijri month as a weekly grid, labeled days starred")
            .arg(PeriodArgs::year())
            .arg(PeriodArgs::month())
            .args(LabelArgs::args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: PeriodArgs::get_year(matches),
            month: PeriodArgs::get_month(matches),
            labels: LabelArgs::from(matches),
        }
    }

    pub async fn run(self, takwim: &Takwim) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month grid...");
        let (year, month) = match (self.year, self.month) {
            (Some(year), Some(month)) => (year, month),
            (year, month) => {
                let today = takwim.today_hijri().await?;
                (year.unwrap_or(today.year), month.unwrap_or(today.month))
            }
        };

        let query = CalendarQuery {
            year,
            month: Some(month),
            only_labeled: false,
            options: self.labels.options(takwim.label_options()),
        };
        let build = takwim.calendar(&query).await;
        check_build(&build, &period_name(&query))?;

        match MonthGrid::from_rows(&build.rows, month) {
            Some(grid) => print!("{}", render(&grid, &build.rows, year, month)?),
            None => println!("No calendar data for {}", period_name(&query)),
        }
        Ok(())
    }
}

/// Renders the grid of one month followed by its labeled days.
fn render(
    grid: &MonthGrid,
    rows: &[CalendarRow],
    year: u16,
    month: u8,
) -> Result<String, fmt::Error> {
    let month_rows: Vec<_> = rows.iter().filter(|a| a.h_month_num == month).collect();

    let name = month_rows
        .first()
        .map(|a| a.h_month_en.as_str())
        .filter(|a| !a.is_empty())
        .map_or_else(|| format!("Month {month}"), ToString::to_string);

    let mut out = String::new();
    writeln!(out, "{}", format!("{name} {year} H").as_str().bold())?;
    writeln!(out, "{WEEKDAY_HEADER}")?;
    for week in grid.weeks() {
        let line = week
            .iter()
            .map(|cell| match cell {
                Some(cell) if cell.marked => {
                    format!("{:>2}", cell.day).as_str().green().to_string()
                }
                Some(cell) => format!("{:>2}", cell.day),
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line.trim_end())?;
    }

    let labeled: Vec<_> = month_rows.iter().filter(|a| a.is_labeled()).collect();
    if !labeled.is_empty() {
        writeln!(out)?;
        for row in labeled {
            writeln!(
                out,
                "{:>2}* {}  {}",
                row.h_day,
                row.gregorian,
                row.joined_labels()
            )?;
        }
    }
    Ok(out)
}
