// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Options controlling how date-time tokens are interpreted.

use jiff::tz::TimeZone;

/// How a trailing `Z` (UTC designator) on a date-time token is treated.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UtcDesignator {
    /// The designator is ignored, every token is read as local time.
    #[default]
    Ignore,

    /// Tokens ending in `Z` are read as UTC, all others as local time.
    Honor,
}

/// Options for parsing an event document.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Time zone used to interpret local date-time tokens.
    pub time_zone: TimeZone,

    /// Treatment of the UTC designator.
    pub utc_designator: UtcDesignator,
}

impl ParseOptions {
    /// Options that read tokens in the given time zone.
    #[must_use]
    pub fn with_time_zone(time_zone: TimeZone) -> Self {
        Self {
            time_zone,
            ..Self::default()
        }
    }

    /// Set the treatment of the UTC designator.
    #[must_use]
    pub fn utc_designator(mut self, utc_designator: UtcDesignator) -> Self {
        self.utc_designator = utc_designator;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            time_zone: TimeZone::system(),
            utc_designator: UtcDesignator::default(),
        }
    }
}
