// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use reqwest::{Client, RequestBuilder, Response};

use crate::config::{AuthMethod, FetchConfig};
use crate::error::FetchError;

/// HTTP client for calendar downloads.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    auth: AuthMethod,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        if config.timeout_secs == 0 {
            return Err(FetchError::Config("timeout_secs must be positive".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            auth: config.auth.clone(),
        })
    }

    /// Builds a GET request with authentication headers.
    pub fn get(&self, url: &str) -> RequestBuilder {
        let req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/calendar, text/plain;q=0.9, */*;q=0.8");

        match &self.auth {
            AuthMethod::Basic { username, password } => req.basic_auth(username, Some(password)),
            AuthMethod::Bearer { token } => req.bearer_auth(token),
            AuthMethod::None => req,
        }
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-success status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, FetchError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
