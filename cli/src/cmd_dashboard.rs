// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use takwim_core::{DEFAULT_UPCOMING_LIMIT, Takwim, Today, labels_for_day};

use crate::cmd_upcoming::CmdUpcoming;
use crate::row_formatter::RowFormatter;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show today in the Hijri calendar and the next labeled days")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the dashboard with today and the upcoming occasions.
    pub async fn run(self, takwim: &Takwim) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        let options = takwim.label_options();

        let today = takwim.today_hijri().await?;
        println!("🗓️ {}", "Today".bold());
        for line in today_lines(&today) {
            println!(" {} {}", "►".green(), line);
        }

        let labels = labels_for_day(today.day, today.month, &today.weekday, options);
        if !labels.is_empty() {
            println!(" {} {}", "►".green(), labels.join(", ").green());
        }
        println!();

        println!("✨ {}", "Upcoming".bold());
        let formatter = RowFormatter::upcoming();
        CmdUpcoming::list(takwim, today.year, options, DEFAULT_UPCOMING_LIMIT, &formatter).await
    }
}

fn today_lines(today: &Today) -> Vec<String> {
    let mut lines = vec![
        format!("{}, {}", today.weekday, today.gregorian),
        format!("{} {} {} H", today.day, today.month_en, today.year),
    ];
    if let (Some(weekday), Some(month)) = (&today.weekday_ar, &today.month_ar) {
        lines.push(format!("{weekday}، {} {month} {}", today.day, today.year));
    }
    lines.extend(today.holidays.iter().map(|a| a.italic().to_string()));
    lines
}
