// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords recognized by the event parser.

/// Line opening an event block.
pub const KW_BEGIN_VEVENT: &str = "BEGIN:VEVENT";
/// Line closing an event block.
pub const KW_END_VEVENT: &str = "END:VEVENT";

/// Event start, a date-time token.
pub const KW_DTSTART: &str = "DTSTART";
/// Event end, a date-time token.
pub const KW_DTEND: &str = "DTEND";
/// Time the document was generated, a date-time token.
pub const KW_DTSTAMP: &str = "DTSTAMP";

/// Short title of the event.
pub const KW_SUMMARY: &str = "SUMMARY";
/// Where the event takes place.
pub const KW_LOCATION: &str = "LOCATION";
/// Longer free-text description.
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
/// Unique identifier of the event.
pub const KW_UID: &str = "UID";

/// English weekday names, indexed by the Sunday-zero offset.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
