// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time-window queries over a sorted event collection.
//!
//! All functions take the current moment explicitly; the day and week
//! boundaries are computed in that moment's time zone.

use icsweek_ical::{EventRecord, Instant};
use jiff::{ToSpan, Zoned};

/// Half-open time window `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Inclusive start.
    pub start: Zoned,
    /// Exclusive end.
    pub end: Zoned,
}

impl Window {
    /// The week containing `now`: local midnight of the most recent Sunday
    /// until seven calendar days later.
    ///
    /// # Errors
    ///
    /// Fails only if the week leaves the supported date range.
    pub fn week_of(now: &Zoned) -> Result<Self, jiff::Error> {
        let start = week_start(now)?;
        let end = start.checked_add(7.days())?;
        Ok(Self { start, end })
    }

    /// Whether an instant falls inside the window. Invalid instants never do.
    #[must_use]
    pub fn contains(&self, instant: &Instant) -> bool {
        *instant >= self.start && *instant < self.end
    }
}

/// Local midnight of the day of `now`.
///
/// # Errors
///
/// Fails only if the day leaves the supported date range.
pub fn day_start(now: &Zoned) -> Result<Zoned, jiff::Error> {
    now.start_of_day()
}

/// Local midnight of the most recent Sunday (today, if today is Sunday).
///
/// # Errors
///
/// Fails only if the date leaves the supported date range.
pub fn week_start(now: &Zoned) -> Result<Zoned, jiff::Error> {
    let back = i64::from(now.weekday().to_sunday_zero_offset());
    day_start(now)?.checked_sub(back.days())
}

/// [`week_start`] plus seven calendar days.
///
/// # Errors
///
/// Fails only if the date leaves the supported date range.
pub fn week_end(now: &Zoned) -> Result<Zoned, jiff::Error> {
    Window::week_of(now).map(|w| w.end)
}

/// Events starting strictly after `now`.
#[must_use]
pub fn future_events<'a>(events: &'a [EventRecord], now: &Zoned) -> Vec<&'a EventRecord> {
    events.iter().filter(|e| starts_after(e, now)).collect()
}

/// Events starting inside the week of `now`.
///
/// # Errors
///
/// Fails only if the week leaves the supported date range.
pub fn this_week_events<'a>(
    events: &'a [EventRecord],
    now: &Zoned,
) -> Result<Vec<&'a EventRecord>, jiff::Error> {
    let window = Window::week_of(now)?;
    Ok(events_within(events, &window))
}

/// Events starting inside an arbitrary window.
#[must_use]
pub fn events_within<'a>(events: &'a [EventRecord], window: &Window) -> Vec<&'a EventRecord> {
    events
        .iter()
        .filter(|e| e.dtstart.as_ref().is_some_and(|s| window.contains(s)))
        .collect()
}

/// The first event starting strictly after `now`.
#[must_use]
pub fn next_event<'a>(events: &'a [EventRecord], now: &Zoned) -> Option<&'a EventRecord> {
    events.iter().find(|e| starts_after(e, now))
}

fn starts_after(event: &EventRecord, now: &Zoned) -> bool {
    event.dtstart.as_ref().is_some_and(|s| *s > *now)
}

#[cfg(test)]
mod tests {
    use icsweek_ical::{ParseOptions, parse_events};
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    use super::*;

    fn at(y: i16, m: i8, d: i8, h: i8, min: i8) -> Zoned {
        date(y, m, d).at(h, min, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    fn events(starts: &[&str]) -> Vec<EventRecord> {
        let src: String = starts
            .iter()
            .map(|s| format!("BEGIN:VEVENT\nDTSTART:{s}\nSUMMARY:{s}\nEND:VEVENT\n"))
            .collect();
        parse_events(&src, &ParseOptions::with_time_zone(TimeZone::UTC))
    }

    fn summaries<'a>(events: &[&'a EventRecord]) -> Vec<&'a str> {
        events.iter().filter_map(|e| e.summary()).collect()
    }

    #[test]
    fn day_start_is_local_midnight() {
        let now = at(2024, 3, 13, 15, 42);
        assert_eq!(day_start(&now).unwrap(), at(2024, 3, 13, 0, 0));
    }

    #[test]
    fn week_starts_on_sunday() {
        // Wednesday
        let now = at(2024, 3, 13, 15, 42);
        assert_eq!(week_start(&now).unwrap(), at(2024, 3, 10, 0, 0));
        assert_eq!(week_end(&now).unwrap(), at(2024, 3, 17, 0, 0));
    }

    #[test]
    fn week_start_on_sunday_is_same_day() {
        let now = at(2024, 3, 10, 0, 0);
        assert_eq!(week_start(&now).unwrap(), at(2024, 3, 10, 0, 0));

        let now = at(2024, 3, 16, 23, 59);
        assert_eq!(week_start(&now).unwrap(), at(2024, 3, 10, 0, 0));
    }

    #[test]
    fn week_crosses_year_boundary() {
        // Wednesday 2025-01-01
        let now = at(2025, 1, 1, 12, 0);
        assert_eq!(week_start(&now).unwrap(), at(2024, 12, 29, 0, 0));
        assert_eq!(week_end(&now).unwrap(), at(2025, 1, 5, 0, 0));
    }

    #[test]
    fn week_over_dst_change_stays_on_midnight() {
        let tz = TimeZone::get("Europe/Berlin").unwrap();
        // Clocks go forward on Sunday 2024-03-31
        let now = date(2024, 4, 3).at(12, 0, 0, 0).to_zoned(tz.clone()).unwrap();
        let start = week_start(&now).unwrap();
        let end = week_end(&now).unwrap();
        assert_eq!(start, date(2024, 3, 31).to_zoned(tz.clone()).unwrap());
        assert_eq!(end, date(2024, 4, 7).to_zoned(tz).unwrap());
        assert_eq!(start.hour(), 0);
    }

    #[test]
    fn future_is_strictly_after_now() {
        let events = events(&["20240313T090000", "20240313T100000", "20240313T110000"]);
        let now = at(2024, 3, 13, 10, 0);
        assert_eq!(summaries(&future_events(&events, &now)), ["20240313T110000"]);
    }

    #[test]
    fn this_week_is_start_inclusive_end_exclusive() {
        let events = events(&[
            "20240309T235900",
            "20240310T000000",
            "20240313T120000",
            "20240316T235900",
            "20240317T000000",
        ]);
        let now = at(2024, 3, 13, 15, 0);
        assert_eq!(
            summaries(&this_week_events(&events, &now).unwrap()),
            ["20240310T000000", "20240313T120000", "20240316T235900"]
        );
    }

    #[test]
    fn invalid_starts_never_match() {
        let events = events(&["garbage", "20240313T120000"]);
        let now = at(2024, 3, 13, 0, 0);
        assert_eq!(future_events(&events, &now).len(), 1);
        assert_eq!(this_week_events(&events, &now).unwrap().len(), 1);
    }

    #[test]
    fn next_event_is_first_future() {
        let events = events(&["20240313T090000", "20240314T090000", "20240315T090000"]);
        let now = at(2024, 3, 13, 9, 0);
        let next = next_event(&events, &now).unwrap();
        assert_eq!(next.summary(), Some("20240314T090000"));
        assert!(next_event(&events, &at(2024, 4, 1, 0, 0)).is_none());
    }

    #[test]
    fn window_filters_arbitrary_range() {
        let events = events(&["20240301T000000", "20240315T000000", "20240401T000000"]);
        let window = Window {
            start: at(2024, 3, 1, 0, 0),
            end: at(2024, 4, 1, 0, 0),
        };
        assert_eq!(
            summaries(&events_within(&events, &window)),
            ["20240301T000000", "20240315T000000"]
        );
    }
}
