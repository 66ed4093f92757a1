// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Retrieval of iCalendar documents over HTTP(S), `webcal://` or from disk.

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

mod config;
mod error;
mod fetcher;
mod http;
mod source;

pub use crate::config::{AuthMethod, FetchConfig};
pub use crate::error::FetchError;
pub use crate::fetcher::Fetcher;
pub use crate::source::Source;
