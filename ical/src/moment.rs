// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion of fixed-width date-time tokens (`YYYYMMDDTHHMMSS[Z]`).

use std::cmp::Ordering;
use std::fmt;

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan, Zoned};

use crate::keyword::WEEKDAY_NAMES;
use crate::options::{ParseOptions, UtcDesignator};

/// A point in time that may be invalid.
///
/// Invalid instants come from malformed date-time tokens. Like a `NaN`, an
/// invalid instant is neither equal to, less than nor greater than anything,
/// including itself. Use [`Instant::total_cmp`] where a total order is needed.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Instant(Option<Zoned>);

impl Instant {
    /// An invalid instant.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Whether the instant denotes an actual point in time.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The zoned date-time, if valid.
    #[must_use]
    pub const fn zoned(&self) -> Option<&Zoned> {
        self.0.as_ref()
    }

    /// The absolute timestamp, if valid.
    #[must_use]
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.0.as_ref().map(Zoned::timestamp)
    }

    /// Total order over instants: valid instants by time, invalid ones last.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.timestamp(), other.timestamp()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<Zoned> for Instant {
    fn from(value: Zoned) -> Self {
        Self(Some(value))
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.timestamp(), other.timestamp()), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.timestamp()?.cmp(&other.timestamp()?))
    }
}

impl PartialEq<Zoned> for Instant {
    fn eq(&self, other: &Zoned) -> bool {
        self.timestamp() == Some(other.timestamp())
    }
}

impl PartialOrd<Zoned> for Instant {
    fn partial_cmp(&self, other: &Zoned) -> Option<Ordering> {
        Some(self.timestamp()?.cmp(&other.timestamp()))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(zoned) => write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M %Z")),
            None => write!(f, "Invalid Date"),
        }
    }
}

/// Structured decomposition of one date-time token.
///
/// The textual segments are kept exactly as extracted from the token, so a
/// short or malformed token yields empty or non-numeric segments together
/// with an invalid [`Instant`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMoment {
    /// Year segment, characters 0..4.
    pub year: String,
    /// Month segment (1-12), characters 4..6.
    pub month: String,
    /// Day segment, characters 6..8.
    pub day: String,
    /// Hour segment, characters 9..11.
    pub hour: String,
    /// Minute segment, characters 11..13.
    pub minute: String,
    /// The moment as a point in time.
    pub instant: Instant,
    /// English weekday name, absent when the instant is invalid.
    pub weekday: Option<&'static str>,
}

impl CalendarMoment {
    /// Convert a date-time token. Never fails; see [`Instant`] for how bad
    /// tokens surface.
    #[must_use]
    pub fn parse(token: &str, options: &ParseOptions) -> Self {
        let year = segment(token, 0, 4);
        let month = segment(token, 4, 2);
        let day = segment(token, 6, 2);
        // character 8 is the date/time separator, skipped by offset
        let hour = segment(token, 9, 2);
        let minute = segment(token, 11, 2);

        let tz = match options.utc_designator {
            UtcDesignator::Honor if is_utc_token(token) => TimeZone::UTC,
            _ => options.time_zone.clone(),
        };

        let instant = civil_date_time(&year, &month, &day, &hour, &minute)
            .and_then(|dt| match dt.to_zoned(tz) {
                Ok(zoned) => Some(zoned),
                Err(e) => {
                    tracing::debug!(token, err = %e, "date-time not representable in zone");
                    None
                }
            })
            .map_or_else(Instant::invalid, Instant::from);

        let weekday = instant.zoned().map(weekday_name);
        Self {
            year,
            month,
            day,
            hour,
            minute,
            instant,
            weekday,
        }
    }

    /// `HH:MM`, built from the raw segments.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{}:{}", self.hour, self.minute)
    }

    /// `DD/MM/YYYY`, built from the raw segments.
    #[must_use]
    pub fn date_label(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// English name of the weekday of a zoned date-time.
#[must_use]
pub fn weekday_name(zoned: &Zoned) -> &'static str {
    let offset = zoned.weekday().to_sunday_zero_offset();
    usize::try_from(offset)
        .ok()
        .and_then(|i| WEEKDAY_NAMES.get(i))
        .copied()
        .unwrap_or_default()
}

/// Characters `[start, start + len)` of the token, truncated at its end.
fn segment(token: &str, start: usize, len: usize) -> String {
    token.chars().skip(start).take(len).collect()
}

fn is_utc_token(token: &str) -> bool {
    token.chars().count() == 16 && token.ends_with('Z')
}

/// Civil date-time from numeric segments. Fields past their range roll
/// over into the next unit, so Feb 30 is Mar 1 and hour 24 is the next day.
fn civil_date_time(year: &str, month: &str, day: &str, hour: &str, minute: &str) -> Option<DateTime> {
    let (year, month, day, hour, minute): (i16, i64, i64, i64, i64) = (
        number(year)?,
        number(month)?,
        number(day)?,
        number(hour)?,
        number(minute)?,
    );
    // units are added one at a time, a span carries a single sign
    let dt = DateTime::new(year, 1, 1, 0, 0, 0, 0)
        .and_then(|dt| dt.checked_add((month - 1).months()))
        .and_then(|dt| dt.checked_add((day - 1).days()))
        .and_then(|dt| dt.checked_add(hour.hours()))
        .and_then(|dt| dt.checked_add(minute.minutes()));
    match dt {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::debug!(year, month, day, hour, minute, err = %e, "date-time out of supported range");
            None
        }
    }
}

fn number<T: std::str::FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
