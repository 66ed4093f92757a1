// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use icsweek_core::{Calendar, EventRecord};

use crate::event_formatter::EventFormatter;
use crate::session::Session;
use crate::util::{OutputFormat, arg_source, get_source};

/// Which slice of the calendar to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    /// Every event in the calendar.
    All,
    /// Events that start after now.
    Future,
    /// Events that start in the current Sunday-to-Sunday week.
    Week,
}

impl EventScope {
    pub const fn name(self) -> &'static str {
        match self {
            EventScope::All => "events",
            EventScope::Future => "future",
            EventScope::Week => "week",
        }
    }

    const fn about(self) -> &'static str {
        match self {
            EventScope::All => "List all events, sorted by start",
            EventScope::Future => "List events that have not started yet",
            EventScope::Week => "List events starting this week (Sunday to Sunday)",
        }
    }

    fn select(self, calendar: &Calendar) -> Result<Vec<EventRecord>, Box<dyn Error>> {
        Ok(match self {
            EventScope::All => calendar.events().to_vec(),
            EventScope::Future => calendar.future_events(),
            EventScope::Week => calendar.this_week_events()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub scope: EventScope,
    pub source: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub fn command(scope: EventScope) -> Command {
        Command::new(scope.name())
            .about(scope.about())
            .arg(arg_source())
            .arg(OutputFormat::arg())
    }

    pub fn from(scope: EventScope, matches: &ArgMatches) -> Self {
        Self {
            scope,
            source: get_source(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    /// The command used when none is given.
    pub fn this_week() -> Self {
        Self {
            scope: EventScope::Week,
            source: None,
            output_format: OutputFormat::Table,
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let calendar = session.load(self.source.as_deref()).await?;
        let events = self.scope.select(&calendar)?;

        let formatter = EventFormatter::new(calendar.now()).with_output_format(self.output_format);
        print!("{}", formatter.format(&events));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdNext {
    pub source: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdNext {
    pub const NAME: &str = "next";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the next event to start")
            .arg(arg_source())
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            source: get_source(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "finding next event...");
        let calendar = session.load(self.source.as_deref()).await?;
        match calendar.next_event() {
            Some(event) => {
                let formatter =
                    EventFormatter::new(calendar.now()).with_output_format(self.output_format);
                print!("{}", formatter.format(&[event]));
            }
            None if self.output_format == OutputFormat::Json => println!("null"),
            None => println!("{}", "No upcoming events".italic()),
        }
        Ok(())
    }
}
