// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use takwim_core::LabelOptions;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Which part of the Hijri calendar to build.
#[derive(Debug, Clone, Copy)]
pub struct PeriodArgs;

impl PeriodArgs {
    pub fn year() -> Arg {
        arg!(-y --year <YEAR> "Hijri year, defaults to the current one")
            .value_parser(value_parser!(u16).range(1..))
    }

    pub fn get_year(matches: &ArgMatches) -> Option<u16> {
        matches.get_one("year").copied()
    }

    pub fn month() -> Arg {
        arg!(-m --month <MONTH> "Hijri month (1-12), defaults to the whole year")
            .value_parser(value_parser!(u8).range(1..=12))
    }

    pub fn get_month(matches: &ArgMatches) -> Option<u8> {
        matches.get_one("month").copied()
    }

    pub fn only_labeled() -> Arg {
        arg!(--"only-labeled" "Only show days carrying a label")
    }

    pub fn get_only_labeled(matches: &ArgMatches) -> bool {
        matches.get_flag("only-labeled")
    }
}

/// Switches turning labels off for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelArgs {
    pub no_weekday_fasting: bool,
    pub no_tasua: bool,
}

impl LabelArgs {
    pub fn args() -> [Arg; 2] {
        [
            arg!(--"no-weekday-fasting" "Do not label Mondays and Thursdays"),
            arg!(--"no-tasua" "Do not label 9 Muharram"),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            no_weekday_fasting: matches.get_flag("no-weekday-fasting"),
            no_tasua: matches.get_flag("no-tasua"),
        }
    }

    /// Applies the switches on top of the configured defaults.
    pub fn options(self, defaults: LabelOptions) -> LabelOptions {
        LabelOptions {
            weekday_fasting: defaults.weekday_fasting && !self.no_weekday_fasting,
            tasua: defaults.tasua && !self.no_tasua,
        }
    }
}
