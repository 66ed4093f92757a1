// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const WEBCAL_SCHEME: &str = "webcal://";

/// Where a calendar document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// HTTP(S) URL.
    Url(String),
    /// Local file.
    File(PathBuf),
    /// Document text given directly.
    Inline(String),
}

impl Source {
    /// Source for a URL; `webcal://` is rewritten to `https://`.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        let url = url.into();
        if let Some(rest) = strip_prefix_ignore_case(&url, WEBCAL_SCHEME) {
            return Self::Url(format!("https://{rest}"));
        }
        Self::Url(url)
    }
}

impl FromStr for Source {
    type Err = Infallible;

    /// URLs are recognized by scheme, anything else is a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(
            if ["http://", "https://", WEBCAL_SCHEME]
                .iter()
                .any(|scheme| strip_prefix_ignore_case(s, scheme).is_some())
            {
                Self::url(s)
            } else {
                Self::File(PathBuf::from(s))
            },
        )
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(text) => write!(f, "<inline, {} bytes>", text.len()),
        }
    }
}
