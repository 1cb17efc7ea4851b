// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

/// Public endpoint of the Aladhan API, version 1.
pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";

/// Conversion API configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct AladhanConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent string.
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    concat!("takwim/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for AladhanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl AladhanConfig {
    /// Creates a configuration pointing at the given base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Joins an endpoint path to the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
