// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use takwim_core::{BuildStatus, CalendarBuild, Issue, IssueKind, Takwim};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// The Hijri year to work on: the given one, or the current one.
pub async fn resolve_year(takwim: &Takwim, year: Option<u16>) -> Result<u16, Box<dyn Error>> {
    match year {
        Some(year) => Ok(year),
        None => {
            tracing::debug!("no year given, asking for today's Hijri date");
            let today = takwim.today_hijri().await?;
            Ok(today.year)
        }
    }
}

/// Logs every issue and prints a one-line summary to stderr.
pub fn report_issues(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }

    for issue in issues {
        tracing::warn!(%issue, kind = ?issue.kind, "calendar incomplete");
    }
    eprintln!(
        "{} {} problem(s) while fetching, some days may be missing",
        "Warning:".yellow(),
        issues.len()
    );
}

/// Fails when nothing could be fetched at all, otherwise reports issues and
/// months rebuilt from single dates.
pub fn check_build(build: &CalendarBuild, what: &str) -> Result<(), Box<dyn Error>> {
    match build.status() {
        BuildStatus::Unavailable => {
            let detail = build
                .issues
                .iter()
                .find(|a| a.kind != IssueKind::NoData)
                .map(ToString::to_string)
                .unwrap_or_default();
            Err(format!("Failed to build calendar for {what}: {detail}").into())
        }
        _ => {
            report_issues(&build.issues);
            if let Some(note) = fallback_note(&build.fallback_months, what) {
                eprintln!("{} {note}", "Note:".cyan());
            }
            Ok(())
        }
    }
}

/// Tells which months only carry their labeled days.
fn fallback_note(months: &[u8], what: &str) -> Option<String> {
    match months {
        [] => None,
        [month] => Some(format!(
            "month {month} of {what} was rebuilt from single dates, only its labeled days are shown"
        )),
        _ => {
            let list = months
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!(
                "months {list} of {what} were rebuilt from single dates, only their labeled days are shown"
            ))
        }
    }
}
