// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event records assembled from the properties of one `VEVENT` block.

use std::collections::BTreeMap;

use crate::keyword::{
    KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_LOCATION, KW_SUMMARY, KW_UID,
};
use crate::moment::{CalendarMoment, Instant};
use crate::options::ParseOptions;
use crate::property::Property;

/// One calendar event.
///
/// The date-typed properties and their display helpers are typed fields;
/// every other property is kept verbatim in [`EventRecord::properties`].
/// Each key holds a single value, a later occurrence replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct EventRecord {
    /// `DTSTART` instant.
    pub dtstart: Option<Instant>,
    /// `DTEND` instant.
    pub dtend: Option<Instant>,
    /// `DTSTAMP` instant.
    pub dtstamp: Option<Instant>,

    /// Start time as `HH:MM`.
    pub start_time: Option<String>,
    /// Start date as `DD/MM/YYYY`.
    pub start_date: Option<String>,
    /// End time as `HH:MM`.
    pub end_time: Option<String>,
    /// End date as `DD/MM/YYYY`.
    pub end_date: Option<String>,
    /// Weekday name of whichever of `DTSTART` / `DTEND` was seen last.
    pub day: Option<String>,

    /// All other properties by key.
    pub properties: BTreeMap<String, String>,
}

impl EventRecord {
    /// Merge one property line into the record.
    pub fn apply(&mut self, prop: Property<'_>, options: &ParseOptions) {
        match prop.key {
            KW_DTSTART => {
                let moment = CalendarMoment::parse(prop.value, options);
                self.start_time = Some(moment.time_label());
                self.start_date = Some(moment.date_label());
                self.day = moment.weekday.map(str::to_owned);
                self.dtstart = Some(moment.instant);
            }
            KW_DTEND => {
                let moment = CalendarMoment::parse(prop.value, options);
                self.end_time = Some(moment.time_label());
                self.end_date = Some(moment.date_label());
                self.day = moment.weekday.map(str::to_owned);
                self.dtend = Some(moment.instant);
            }
            KW_DTSTAMP => {
                self.dtstamp = Some(CalendarMoment::parse(prop.value, options).instant);
            }
            key => {
                self.properties.insert(key.to_owned(), prop.value.to_owned());
            }
        }
    }

    /// Value of a non-date property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// `SUMMARY` text.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.property(KW_SUMMARY)
    }

    /// `LOCATION` text.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.property(KW_LOCATION)
    }

    /// `DESCRIPTION` text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.property(KW_DESCRIPTION)
    }

    /// `UID` text.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.property(KW_UID)
    }

    /// Start instant; invalid when `DTSTART` is missing or malformed.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.dtstart.clone().unwrap_or_default()
    }
}
