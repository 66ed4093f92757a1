// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

pub fn arg_source() -> Arg {
    arg!([SOURCE] "Calendar to read: http(s) or webcal URL, or a file path")
        .long_help(
            "\
Calendar to read: an http(s) or webcal URL, or a path to an .ics file. \
Defaults to `core.source` from the configuration file.",
        )
        .value_hint(ValueHint::AnyPath)
}

pub fn get_source(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("SOURCE").cloned()
}
