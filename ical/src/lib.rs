// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Best-effort parsing of the events in an iCalendar document.
//!
//! Only `VEVENT` blocks are read, one `KEY:VALUE` line at a time. Malformed
//! input degrades instead of failing.

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
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod event;
pub mod keyword;
mod moment;
mod options;
mod parser;
mod property;

pub use crate::event::EventRecord;
pub use crate::moment::{CalendarMoment, Instant, weekday_name};
pub use crate::options::{ParseOptions, UtcDesignator};
pub use crate::parser::{ParseReport, parse_events, parse_events_with_report, sort_by_start};
pub use crate::property::Property;
