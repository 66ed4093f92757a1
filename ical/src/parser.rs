// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented state machine turning a document into event records.

use crate::event::EventRecord;
use crate::keyword::{KW_BEGIN_VEVENT, KW_END_VEVENT};
use crate::options::ParseOptions;
use crate::property::Property;

/// Counters collected while parsing a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Number of lines in the document; a final line break does not start
    /// another line.
    pub lines: usize,
    /// Number of events sealed by `END:VEVENT`.
    pub events: usize,
    /// Non-blank lines seen outside any event block.
    pub ignored_lines: usize,
    /// Whether the document ended inside an unterminated event block.
    pub dangling: bool,
}

enum State {
    NotInEvent,
    InEvent(EventRecord),
}

/// Parse the events of a document, sorted by start.
///
/// Parsing never fails: lines without a colon become keys with empty values,
/// malformed dates become invalid instants and an unterminated trailing event
/// is dropped.
///
/// ## Examples
///
/// ```
/// # use icsweek_ical::{ParseOptions, parse_events};
/// let src = "\
/// BEGIN:VEVENT\r\n\
/// DTSTART:20240101T090000\r\n\
/// SUMMARY:Kickoff\r\n\
/// END:VEVENT\r\n\
/// ";
/// let events = parse_events(src, &ParseOptions::default());
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].summary(), Some("Kickoff"));
/// assert_eq!(events[0].start_time.as_deref(), Some("09:00"));
/// ```
#[must_use]
pub fn parse_events(src: &str, options: &ParseOptions) -> Vec<EventRecord> {
    parse_events_with_report(src, options).0
}

/// Same as [`parse_events`], also returning counters about the document.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn parse_events_with_report(
    src: &str,
    options: &ParseOptions,
) -> (Vec<EventRecord>, ParseReport) {
    let mut events = Vec::new();
    let mut report = ParseReport::default();
    let mut state = State::NotInEvent;

    let cleaned = src.replace('\r', "");
    for line in cleaned.lines() {
        report.lines += 1;
        let line = line.trim();

        state = match state {
            State::NotInEvent if line == KW_BEGIN_VEVENT => State::InEvent(EventRecord::default()),
            State::NotInEvent => {
                if !line.is_empty() {
                    report.ignored_lines += 1;
                }
                State::NotInEvent
            }
            State::InEvent(record) if line == KW_END_VEVENT => {
                events.push(record);
                State::NotInEvent
            }
            State::InEvent(mut record) => {
                record.apply(Property::parse(line), options);
                State::InEvent(record)
            }
        };
    }

    if let State::InEvent(record) = state {
        tracing::debug!(summary = ?record.summary(), "dropping unterminated event");
        report.dangling = true;
    }

    sort_by_start(&mut events);
    report.events = events.len();
    tracing::debug!(?report, "document parsed");
    (events, report)
}

/// Stable sort by start instant; records without a valid start go last.
pub fn sort_by_start(events: &mut [EventRecord]) {
    events.sort_by(|a, b| a.start().total_cmp(&b.start()));
}
