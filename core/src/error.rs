// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use icsweek_fetch::FetchError;

/// Errors of the calendar core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Retrieving the document failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The configured time zone is unknown.
    #[error("Invalid time zone '{name}': {source}")]
    TimeZone {
        /// Name as configured.
        name: String,
        /// Lookup error.
        source: jiff::Error,
    },

    /// Date arithmetic left the supported range.
    #[error("Date arithmetic failed: {0}")]
    Time(#[from] jiff::Error),
}
