// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

/// Conversion API client errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AladhanError {
    /// Network failure, timeout or unexpected HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint has no data for the requested period (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The response envelope carried a non-200 code.
    #[error("API error {code}: {status}")]
    Api {
        /// Code reported in the envelope.
        code: u16,
        /// Status text reported in the envelope.
        status: String,
    },

    /// The payload does not have the expected shape.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AladhanError {
    /// Whether the error means the upstream could not be reached or refused
    /// to answer, as opposed to answering with no data or malformed data.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}

impl From<reqwest::Error> for AladhanError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for AladhanError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
