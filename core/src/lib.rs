// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! icsweek core: a calendar feed and its time-window queries.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod calendar;
mod config;
mod error;
pub mod query;
mod store;

pub use crate::calendar::Calendar;
pub use crate::config::{APP_NAME, Config};
pub use crate::error::Error;
pub use crate::query::Window;
pub use crate::store::EventStore;
pub use icsweek_fetch::{AuthMethod, FetchConfig, FetchError, Fetcher, Source};
pub use icsweek_ical::{EventRecord, Instant, ParseOptions, UtcDesignator};
