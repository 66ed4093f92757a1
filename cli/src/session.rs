// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use icsweek_core::{Calendar, Fetcher, ParseOptions, Source};

use crate::config::Config;

/// Everything a command needs: parse options, a fetcher and the default source.
#[derive(Debug)]
pub struct Session {
    options: ParseOptions,
    fetcher: Fetcher,
    default_source: Option<String>,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let options = config.core.parse_options()?;
        let fetcher = Fetcher::new(&config.fetch)?;
        Ok(Self {
            options,
            fetcher,
            default_source: config.core.source,
        })
    }

    /// An empty calendar in the configured time zone.
    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.options.clone())
    }

    /// Load the given source, or the configured one.
    pub async fn load(&self, source: Option<&str>) -> Result<Calendar, Box<dyn Error>> {
        let source = self.resolve_source(source)?;
        tracing::debug!(%source, "loading calendar...");

        let calendar = self.calendar();
        let count = calendar.load(&source, &self.fetcher).await?;
        tracing::info!(count, "calendar loaded");
        Ok(calendar)
    }

    fn resolve_source(&self, source: Option<&str>) -> Result<Source, Box<dyn Error>> {
        let raw = source.or(self.default_source.as_deref()).ok_or(
            "No calendar source given: pass SOURCE or set `core.source` in the configuration file",
        )?;
        Ok(raw.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn session(default_source: Option<&str>) -> Session {
        let mut config = Config::default();
        config.core.source = default_source.map(str::to_owned);
        config.core.time_zone = Some("UTC".to_string());
        Session::new(config).unwrap()
    }

    #[test]
    fn argument_overrides_configured_source() {
        let session = session(Some("https://example.com/a.ics"));
        let source = session.resolve_source(Some("./b.ics")).unwrap();
        assert_eq!(source, Source::File(PathBuf::from("./b.ics")));
    }

    #[test]
    fn falls_back_to_configured_source() {
        let session = session(Some("webcal://example.com/a.ics"));
        let source = session.resolve_source(None).unwrap();
        assert_eq!(source, Source::Url("https://example.com/a.ics".to_string()));
    }

    #[test]
    fn errors_without_any_source() {
        let session = session(None);
        assert!(session.resolve_source(None).is_err());
    }
}
