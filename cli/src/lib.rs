// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of Takwim.

mod arg;
mod cli;
mod cmd_calendar;
mod cmd_dashboard;
mod cmd_export;
mod cmd_generate_completion;
mod cmd_grid;
mod cmd_upcoming;
mod config;
mod row_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
