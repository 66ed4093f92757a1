// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use icsweek_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_bounds::CmdBounds;
use crate::cmd_event::{CmdEventList, CmdNext, EventScope};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;
use crate::session::Session;

const ICSWEEK_LOG_ENV: &str = "ICSWEEK_LOG";

/// Run the icsweek command-line interface.
pub async fn run() {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => exit_with(&*e),
    };

    init_tracing(cli.verbose);
    if let Err(e) = cli.run().await {
        exit_with(&*e);
    }
}

fn exit_with(e: &dyn Error) -> ! {
    eprintln!("{} {}", "Error:".red(), e);
    process::exit(1)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(ICSWEEK_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Log at debug level
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Read an iCalendar feed and list this week's events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to week
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $ICSWEEK_CONFIG, then \
$XDG_CONFIG_HOME/icsweek/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/icsweek/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-v --verbose "Log at debug level, overriding $ICSWEEK_LOG")
                    .global(true),
            )
            .subcommand(CmdEventList::command(EventScope::Week))
            .subcommand(CmdEventList::command(EventScope::Future))
            .subcommand(CmdEventList::command(EventScope::All))
            .subcommand(CmdNext::command())
            .subcommand(CmdBounds::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let scope = |name: &str| {
            [EventScope::Week, EventScope::Future, EventScope::All]
                .into_iter()
                .find(|scope| scope.name() == name)
        };

        let command = match matches.subcommand() {
            Some((CmdNext::NAME, matches)) => Next(CmdNext::from(matches)),
            Some((CmdBounds::NAME, matches)) => Bounds(CmdBounds::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, matches)) => match scope(name) {
                Some(scope) => EventList(CmdEventList::from(scope, matches)),
                None => return Err(format!("Unknown command: {name}").into()),
            },
            None => EventList(CmdEventList::this_week()),
        };

        let config = matches.get_one("config").cloned();
        let verbose = matches.get_flag("verbose");
        Ok(Cli {
            config,
            verbose,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List events of a scope
    EventList(CmdEventList),

    /// Show the next event
    Next(CmdNext),

    /// Show day and week bounds
    Bounds(CmdBounds),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::GenerateCompletion(a) => a.run(),
            command => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                let session = Session::new(config)?;
                command.run_with(&session).await
            }
        }
    }

    async fn run_with(self, session: &Session) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            EventList(a) => a.run(session).await,
            Next(a) => a.run(session).await,
            Bounds(a) => a.run(session),
            GenerateCompletion(a) => a.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cmd_generate_completion::Shell, util::OutputFormat};

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::EventList(CmdEventList {
                scope: EventScope::Week,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = vec!["test", "future", "-v", "--config", "/tmp/c.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_parse_scopes() {
        for (name, expected) in [
            ("week", EventScope::Week),
            ("future", EventScope::Future),
            ("events", EventScope::All),
        ] {
            let cli = Cli::try_parse_from(vec!["test", name]).unwrap();
            match cli.command {
                Commands::EventList(cmd) => assert_eq!(cmd.scope, expected),
                _ => panic!("Expected EventList command for {name}"),
            }
        }
    }

    #[test]
    fn test_parse_week_with_source() {
        let args = vec!["test", "week", "webcal://example.com/a.ics", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventList(cmd) => {
                assert_eq!(cmd.source.as_deref(), Some("webcal://example.com/a.ics"));
                assert_eq!(cmd.output_format, OutputFormat::Json);
            }
            _ => panic!("Expected EventList command"),
        }
    }

    #[test]
    fn test_parse_next() {
        let cli = Cli::try_parse_from(vec!["test", "next", "cal.ics"]).unwrap();
        match cli.command {
            Commands::Next(cmd) => assert_eq!(cmd.source.as_deref(), Some("cal.ics")),
            _ => panic!("Expected Next command"),
        }
    }

    #[test]
    fn test_parse_bounds() {
        let cli = Cli::try_parse_from(vec!["test", "bounds"]).unwrap();
        assert!(matches!(cli.command, Commands::Bounds(_)));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(Cli::try_parse_from(vec!["test", "todo"]).is_err());
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
