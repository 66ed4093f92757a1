// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Retrieval of calendar documents from any [`Source`].

use std::sync::Arc;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::source::Source;

/// Retrieves calendar documents.
///
/// # Example
///
/// ```ignore
/// use icsweek_fetch::{Fetcher, FetchConfig, Source};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::new(&FetchConfig::default())?;
/// let text = fetcher.fetch(&"webcal://example.com/team.ics".parse()?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: Arc<HttpClient>,
}

impl Fetcher {
    /// Creates a new fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Retrieve the full text of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails, times out, answers with a
    /// non-success status or the file cannot be read.
    #[tracing::instrument(skip_all, fields(source = %source))]
    pub async fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        let text = match source {
            Source::Url(url) => {
                let resp = self.http.execute(self.http.get(url)).await?;
                resp.text().await?
            }
            Source::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            Source::Inline(text) => text.clone(),
        };

        tracing::debug!(bytes = text.len(), "document retrieved");
        Ok(text)
    }
}
