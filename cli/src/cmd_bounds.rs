// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use icsweek_core::Calendar;
use jiff::Zoned;
use serde::Serialize;

use crate::session::Session;
use crate::util::OutputFormat;

/// Print the day and week boundaries used by the queries.
#[derive(Debug, Clone, Copy)]
pub struct CmdBounds {
    pub output_format: OutputFormat,
}

impl CmdBounds {
    pub const NAME: &str = "bounds";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the start of today and the bounds of this week")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing bounds...");
        let bounds = Bounds::of(&session.calendar())?;
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bounds)?),
            OutputFormat::Table => print!("{bounds}"),
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Bounds {
    day_start: Zoned,
    week_start: Zoned,
    week_end: Zoned,
}

impl Bounds {
    fn of(calendar: &Calendar) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            day_start: calendar.day_start()?,
            week_start: calendar.week_start()?,
            week_end: calendar.week_end()?,
        })
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const FMT: &str = "%a %Y-%m-%d %H:%M %Z";
        writeln!(f, "{}  {}", "Day start ".bold(), self.day_start.strftime(FMT))?;
        writeln!(f, "{}  {}", "Week start".bold(), self.week_start.strftime(FMT))?;
        writeln!(f, "{}  {}", "Week end  ".bold(), self.week_end.strftime(FMT))
    }
}

#[cfg(test)]
mod tests {
    use jiff::{ToSpan, civil::date, tz::TimeZone};

    use super::*;

    #[test]
    fn formats_bounds() {
        colored::control::set_override(false);
        let at = |d: i8| date(2024, 3, d).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        let bounds = Bounds {
            day_start: at(13),
            week_start: at(10),
            week_end: at(17),
        };
        assert_eq!(
            bounds.to_string(),
            "\
Day start   Wed 2024-03-13 00:00 UTC
Week start  Sun 2024-03-10 00:00 UTC
Week end    Sun 2024-03-17 00:00 UTC
"
        );
    }

    #[test]
    fn week_is_seven_days() {
        let session = {
            let mut config = crate::config::Config::default();
            config.core.time_zone = Some("UTC".to_string());
            Session::new(config).unwrap()
        };
        let bounds = Bounds::of(&session.calendar()).unwrap();
        assert_eq!(bounds.week_start.weekday(), jiff::civil::Weekday::Sunday);
        assert_eq!(
            bounds.week_end.date(),
            bounds.week_start.date().checked_add(7.days()).unwrap()
        );
        assert!(bounds.week_start <= bounds.day_start);
        assert!(bounds.day_start < bounds.week_end);
    }
}
