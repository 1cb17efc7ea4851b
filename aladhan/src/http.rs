// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with timeout and status handling.

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::config::AladhanConfig;
use crate::error::AladhanError;

/// HTTP client for conversion API calls.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: AladhanConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: AladhanConfig) -> Result<Self, AladhanError> {
        if config.base_url.is_empty() {
            return Err(AladhanError::Config("base_url must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a GET request for an endpoint path relative to the base URL.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.config.url(path))
    }

    /// Executes a request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`AladhanError::NotFound`] on 404, [`AladhanError::Http`] when
    /// the request fails or returns any other non-success status.
    pub async fn execute(&self, req: RequestBuilder) -> Result<String, AladhanError> {
        let resp = req.send().await?;
        let url = resp.url().path().to_string();

        match resp.status() {
            status if status.is_success() => Ok(resp.text().await?),
            StatusCode::NOT_FOUND => Err(AladhanError::NotFound(url)),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(AladhanError::Http(format!("{status}: {text}")))
            }
        }
    }
}
