// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate, generate_to};
use clap_complete_nushell::Nushell;
use takwim_core::APP_NAME;

use crate::Cli;

/// Writes a completion script for `takwim`, to stdout or into a directory.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate the shell completion script for takwim")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
            .arg(
                arg!(dir: -d --dir <DIR> "Write the script into this directory instead of stdout")
                    .value_parser(value_parser!(PathBuf)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
            dir: matches.get_one::<PathBuf>("dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.dir {
            Some(dir) => {
                let path = self.write_to(dir)?;
                println!("Completion script written to {}", path.display());
            }
            None => self.write(&mut io::stdout()),
        }
        Ok(())
    }

    /// Writes the script into `dir`, named the way the shell expects it.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        generate_to(self.shell, &mut Cli::command(), APP_NAME, dir)
    }

    pub fn write(&self, buf: &mut impl io::Write) {
        generate(self.shell, &mut Cli::command(), APP_NAME, buf);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Shells covered by `clap_complete` itself; `None` for nushell.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as S;
        match self {
            Shell::Bash => Some(S::Bash),
            Shell::Elvish => Some(S::Elvish),
            Shell::Fish => Some(S::Fish),
            Shell::PowerShell => Some(S::PowerShell),
            Shell::Zsh => Some(S::Zsh),
            Shell::Nushell => None,
        }
    }
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        match self.builtin() {
            Some(shell) => shell.file_name(name),
            None => Nushell.file_name(name),
        }
    }

    fn generate(&self, cmd: &Command, buf: &mut dyn io::Write) {
        match self.builtin() {
            Some(shell) => shell.generate(cmd, buf),
            None => Nushell.generate(cmd, buf),
        }
    }
}
