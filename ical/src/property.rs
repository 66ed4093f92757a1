// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Splitting of a single `KEY:VALUE` content line.

/// A raw property line split into key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'src> {
    /// Text left of the first colon, trimmed.
    pub key: &'src str,

    /// Text right of the first colon, trimmed. Empty if the line has no colon.
    pub value: &'src str,
}

impl<'src> Property<'src> {
    /// Split a line at its first `:`.
    ///
    /// A line without a colon becomes a key with an empty value.
    #[must_use]
    pub fn parse(line: &'src str) -> Self {
        match line.split_once(':') {
            Some((key, value)) => Self {
                key: key.trim(),
                value: value.trim(),
            },
            None => Self {
                key: line.trim(),
                value: "",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_colon() {
        let prop = Property::parse("URL:https://example.com:8080/a");
        assert_eq!(prop.key, "URL");
        assert_eq!(prop.value, "https://example.com:8080/a");
    }

    #[test]
    fn trims_both_sides() {
        let prop = Property::parse("  SUMMARY  :  Team sync \t");
        assert_eq!(prop.key, "SUMMARY");
        assert_eq!(prop.value, "Team sync");
    }

    #[test]
    fn line_without_colon_is_key_only() {
        let prop = Property::parse(" TRANSPARENT ");
        assert_eq!(prop.key, "TRANSPARENT");
        assert_eq!(prop.value, "");
    }

    #[test]
    fn keeps_parameters_in_key() {
        let prop = Property::parse("DTSTART;TZID=Europe/Berlin:20240101T090000");
        assert_eq!(prop.key, "DTSTART;TZID=Europe/Berlin");
        assert_eq!(prop.value, "20240101T090000");
    }

    #[test]
    fn empty_value_after_colon() {
        let prop = Property::parse("LOCATION:");
        assert_eq!(prop.key, "LOCATION");
        assert_eq!(prop.value, "");
    }
}
