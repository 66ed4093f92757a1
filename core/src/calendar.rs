// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use icsweek_fetch::{Fetcher, Source};
use icsweek_ical::{EventRecord, ParseOptions, parse_events_with_report};
use jiff::Zoned;
use tokio::task::JoinHandle;

use crate::error::Error;
use crate::query::{self, Window};
use crate::store::EventStore;

/// A calendar document and the queries over its events.
///
/// Queries are available at any time; before the first successful load they
/// see an empty collection.
///
/// # Example
///
/// ```ignore
/// use icsweek_core::Calendar;
/// use icsweek_fetch::{FetchConfig, Fetcher};
/// use icsweek_ical::ParseOptions;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::new(&FetchConfig::default())?;
/// let calendar = Calendar::new(ParseOptions::default());
/// calendar.load(&"https://example.com/team.ics".parse()?, &fetcher).await?;
/// for event in calendar.this_week_events()? {
///     println!("{:?}", event.summary());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Calendar {
    store: EventStore,
    options: ParseOptions,
}

impl Calendar {
    /// An empty calendar using the given parse options.
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self {
            store: EventStore::new(),
            options,
        }
    }

    /// A calendar built from document text.
    #[must_use]
    pub fn from_text(text: &str, options: ParseOptions) -> Self {
        let calendar = Self::new(options);
        calendar.load_str(text);
        calendar
    }

    /// Create a calendar and load `source` on a background task.
    ///
    /// `on_ready` runs once the document is parsed. The returned handle
    /// resolves to the number of events, or to the error that stopped the
    /// load.
    pub fn spawn<F>(
        source: Source,
        fetcher: Fetcher,
        options: ParseOptions,
        on_ready: F,
    ) -> (Arc<Self>, JoinHandle<Result<usize, Error>>)
    where
        F: FnOnce(&Self) + Send + 'static,
    {
        let calendar = Arc::new(Self::new(options));
        let task = {
            let calendar = Arc::clone(&calendar);
            tokio::spawn(async move {
                let count = calendar.load(&source, &fetcher).await?;
                on_ready(&calendar);
                Ok(count)
            })
        };
        (calendar, task)
    }

    /// Parse options used for every load.
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a document and replace the events with its contents.
    ///
    /// Returns the number of events found.
    pub fn load_str(&self, text: &str) -> usize {
        let (events, report) = parse_events_with_report(text, &self.options);
        if report.dangling {
            tracing::warn!("document ends inside an event, last event dropped");
        }
        let count = events.len();
        self.store.replace(events);
        count
    }

    /// Retrieve a document and replace the events with its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if retrieval fails; the current events are kept.
    #[tracing::instrument(skip_all, fields(source = %source))]
    pub async fn load(&self, source: &Source, fetcher: &Fetcher) -> Result<usize, Error> {
        let text = fetcher.fetch(source).await?;
        let count = self.load_str(&text);
        tracing::debug!(count, "calendar loaded");
        Ok(count)
    }

    /// The current time in the calendar's time zone.
    #[must_use]
    pub fn now(&self) -> Zoned {
        Zoned::now().with_time_zone(self.options.time_zone.clone())
    }

    /// All events, sorted by start.
    #[must_use]
    pub fn events(&self) -> Arc<[EventRecord]> {
        self.store.snapshot()
    }

    /// Events starting after now.
    #[must_use]
    pub fn future_events(&self) -> Vec<EventRecord> {
        self.future_events_at(&self.now())
    }

    /// Events starting after `now`.
    #[must_use]
    pub fn future_events_at(&self, now: &Zoned) -> Vec<EventRecord> {
        let events = self.events();
        query::future_events(&events, now).into_iter().cloned().collect()
    }

    /// Events starting in the current week.
    ///
    /// # Errors
    ///
    /// Fails only if the week leaves the supported date range.
    pub fn this_week_events(&self) -> Result<Vec<EventRecord>, Error> {
        self.this_week_events_at(&self.now())
    }

    /// Events starting in the week of `now`.
    ///
    /// # Errors
    ///
    /// Fails only if the week leaves the supported date range.
    pub fn this_week_events_at(&self, now: &Zoned) -> Result<Vec<EventRecord>, Error> {
        let events = self.events();
        let window = Window::week_of(now)?;
        Ok(query::events_within(&events, &window)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The next event to start.
    #[must_use]
    pub fn next_event(&self) -> Option<EventRecord> {
        self.next_event_at(&self.now())
    }

    /// The first event starting after `now`.
    #[must_use]
    pub fn next_event_at(&self, now: &Zoned) -> Option<EventRecord> {
        let events = self.events();
        query::next_event(&events, now).cloned()
    }

    /// Local midnight today.
    ///
    /// # Errors
    ///
    /// Fails only if the date leaves the supported date range.
    pub fn day_start(&self) -> Result<Zoned, Error> {
        Ok(query::day_start(&self.now())?)
    }

    /// Local midnight of the most recent Sunday.
    ///
    /// # Errors
    ///
    /// Fails only if the date leaves the supported date range.
    pub fn week_start(&self) -> Result<Zoned, Error> {
        Ok(query::week_start(&self.now())?)
    }

    /// [`Calendar::week_start`] plus seven days.
    ///
    /// # Errors
    ///
    /// Fails only if the date leaves the supported date range.
    pub fn week_end(&self) -> Result<Zoned, Error> {
        Ok(query::week_end(&self.now())?)
    }
}
