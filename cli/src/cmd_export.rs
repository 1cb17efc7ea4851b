// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use takwim_core::{CalendarQuery, ExportFormat, Takwim};
use tokio::{fs, io::AsyncWriteExt};

use crate::arg::{LabelArgs, PeriodArgs};
use crate::cmd_calendar::period_name;
use crate::util::{check_build, resolve_year};

#[derive(Debug, Clone)]
pub struct CmdExport {
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub only_labeled: bool,
    pub labels: LabelArgs,
}

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export the labeled calendar as CSV or iCalendar")
            .arg(
                arg!(-f --format <FORMAT> "Export format")
                    .value_parser(value_parser!(ExportFormat))
                    .default_value("csv"),
            )
            .arg(
                arg!(-o --output <PATH> "Output file, `-` for stdout")
                    .long_help(
                        "\
Output file, `-` for stdout. Defaults to takwim-H<year>[-<month>].<ext> in the configured \
export_dir, or stdout when none is configured.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(PeriodArgs::year())
            .arg(PeriodArgs::month())
            .arg(PeriodArgs::only_labeled())
            .args(LabelArgs::args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            format: matches
                .get_one("format")
                .copied()
                .unwrap_or(ExportFormat::Csv),
            output: matches.get_one("output").cloned(),
            year: PeriodArgs::get_year(matches),
            month: PeriodArgs::get_month(matches),
            only_labeled: PeriodArgs::get_only_labeled(matches),
            labels: LabelArgs::from(matches),
        }
    }

    pub async fn run(self, takwim: &Takwim) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting calendar...");
        let query = CalendarQuery {
            year: resolve_year(takwim, self.year).await?,
            month: self.month,
            only_labeled: self.only_labeled,
            options: self.labels.options(takwim.label_options()),
        };

        let build = takwim.calendar(&query).await;
        check_build(&build, &period_name(&query))?;

        let content = self.format.render(&build.rows)?;
        let target = output_path(
            self.output.as_deref(),
            takwim.config().export_dir.as_deref(),
            &query,
            self.format,
        );

        match target {
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(content.as_bytes()).await?;
                stdout.flush().await?;
            }
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent).await.map_err(|e| {
                            format!("Failed to create directory {}: {e}", parent.display())
                        })?;
                    }
                }
                fs::write(&path, content)
                    .await
                    .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

                println!(
                    "{} {} rows to {}",
                    "Exported".green(),
                    build.rows.len(),
                    path.display()
                );
            }
        }
        Ok(())
    }
}

/// Where the export goes, `None` meaning stdout.
fn output_path(
    output: Option<&Path>,
    export_dir: Option<&Path>,
    query: &CalendarQuery,
    format: ExportFormat,
) -> Option<PathBuf> {
    match (output, export_dir) {
        (Some(path), _) if path == Path::new("-") => None,
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Some(dir)) => Some(dir.join(default_file_name(query, format))),
        (None, None) => None,
    }
}

fn default_file_name(query: &CalendarQuery, format: ExportFormat) -> String {
    match query.month {
        Some(month) => format!("takwim-H{}-{month:02}.{}", query.year, format.extension()),
        None => format!("takwim-H{}.{}", query.year, format.extension()),
    }
}
