// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::Generator;
use icsweek_core::APP_NAME;

use crate::Cli;

/// Print a completion script for the `icsweek` binary.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a shell completion script for icsweek")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.write_to(&mut io::stdout().lock())
    }

    /// Write the script for [`Cli::command`] under the binary name.
    pub fn write_to(self, buf: &mut dyn io::Write) -> Result<(), Box<dyn Error>> {
        let mut cmd = Cli::command();
        cmd.set_bin_name(APP_NAME);
        cmd.build();
        match self.shell {
            Shell::Bash => clap_complete::Shell::Bash.generate(&cmd, buf),
            Shell::Fish => clap_complete::Shell::Fish.generate(&cmd, buf),
            Shell::Zsh => clap_complete::Shell::Zsh.generate(&cmd, buf),
            Shell::Nushell => clap_complete_nushell::Nushell {}.generate(&cmd, buf),
        }
        buf.flush()?;
        Ok(())
    }
}

/// Shells with a completion script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Fish,
    Nushell,
    Zsh,
}
