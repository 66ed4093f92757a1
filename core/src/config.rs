// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use icsweek_ical::{ParseOptions, UtcDesignator};
use jiff::tz::TimeZone;

use crate::error::Error;

/// The name of the application.
pub const APP_NAME: &str = "icsweek";

/// Core configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Default calendar source: URL, `webcal://` URL or file path.
    #[serde(default)]
    pub source: Option<String>,

    /// IANA time zone used for local times and week boundaries. Defaults to
    /// the system time zone.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Treatment of a trailing `Z` on date-time values.
    #[serde(default)]
    pub utc_designator: UtcDesignator,
}

impl Config {
    /// Build the parse options described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the time zone is unknown.
    pub fn parse_options(&self) -> Result<ParseOptions, Error> {
        let time_zone = match &self.time_zone {
            Some(name) => TimeZone::get(name).map_err(|source| Error::TimeZone {
                name: name.clone(),
                source,
            })?,
            None => TimeZone::system(),
        };
        Ok(ParseOptions::with_time_zone(time_zone).utc_designator(self.utc_designator))
    }
}
