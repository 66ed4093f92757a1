// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use icsweek_core::EventRecord;
use jiff::Zoned;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    now: Zoned,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(now: Zoned) -> Self {
        Self {
            columns: vec![
                EventColumn::Day,
                EventColumn::Date,
                EventColumn::TimeRange,
                EventColumn::Summary,
                EventColumn::Location,
            ],
            now,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [EventRecord]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }

    /// Dim events that already started.
    fn row_color(&self, event: &EventRecord) -> Option<Color> {
        match &event.dtstart {
            Some(start) if *start <= self.now => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [EventRecord],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table if self.events.is_empty() => writeln!(f, "No events."),
            OutputFormat::Table => {
                let color = |e: &EventRecord| self.formatter.row_color(e);
                let table =
                    Table::new(&self.formatter.columns, self.events).with_row_color(&color);
                write!(f, "{table}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Day,
    Date,
    TimeRange,
    Summary,
    Location,
}

impl TableColumn<EventRecord> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Day => "Day",
            EventColumn::Date => "Date",
            EventColumn::TimeRange => "Time",
            EventColumn::Summary => "Summary",
            EventColumn::Location => "Location",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a EventRecord) -> Cow<'a, str> {
        match self {
            EventColumn::Day => event.day.as_deref().unwrap_or("").into(),
            EventColumn::Date => event.start_date.as_deref().unwrap_or("").into(),
            EventColumn::TimeRange => match (&event.start_time, &event.end_time) {
                (Some(start), Some(end)) => format!("{start} - {end}").into(),
                (Some(start), None) => start.as_str().into(),
                (None, Some(end)) => format!("- {end}").into(),
                (None, None) => "".into(),
            },
            EventColumn::Summary => event.summary().unwrap_or("").into(),
            EventColumn::Location => event.location().unwrap_or("").into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Date | EventColumn::TimeRange => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
