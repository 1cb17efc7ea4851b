// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion API client.

use std::sync::Arc;

use jiff::civil::Date;
use serde::de::DeserializeOwned;

use crate::config::AladhanConfig;
use crate::error::AladhanError;
use crate::http::HttpClient;
use crate::types::{DayRecord, Envelope, format_dmy};

/// Client for the Hijri/Gregorian conversion endpoints.
///
/// # Example
///
/// ```ignore
/// use takwim_aladhan::{AladhanClient, AladhanConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AladhanClient::new(AladhanConfig::default())?;
/// let ramadan = client.hijri_calendar(1447, 9).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AladhanClient {
    http: Arc<HttpClient>,
}

impl AladhanClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: AladhanConfig) -> Result<Self, AladhanError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Fetches the day records of one Hijri month.
    ///
    /// # Errors
    ///
    /// Returns [`AladhanError::NotFound`] when the endpoint has no table for
    /// this month, or any other error when the request or decoding fails.
    pub async fn hijri_calendar(
        &self,
        year: u16,
        month: u8,
    ) -> Result<Vec<DayRecord>, AladhanError> {
        check_month(month)?;
        tracing::debug!(year, month, "fetching hijri month calendar");

        let req = self.http.get(&format!("hToGCalendar/{year}/{month}"));
        let body = self.http.execute(req).await?;
        decode(&body)
    }

    /// Converts a single Hijri date to its Gregorian counterpart.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the payload lacks either
    /// side of the conversion.
    pub async fn hijri_to_gregorian(
        &self,
        day: u8,
        month: u8,
        year: u16,
    ) -> Result<DayRecord, AladhanError> {
        check_month(month)?;
        let date = format!("{day:02}-{month:02}-{year}");
        tracing::debug!(%date, "converting hijri date");

        let req = self.http.get("hToG").query(&[("date", &date)]);
        let body = self.http.execute(req).await?;
        complete(decode(&body)?, &date)
    }

    /// Converts a single Gregorian date to its Hijri counterpart.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the payload lacks either
    /// side of the conversion.
    pub async fn gregorian_to_hijri(&self, date: Date) -> Result<DayRecord, AladhanError> {
        let date = format_dmy(date);
        tracing::debug!(%date, "converting gregorian date");

        let req = self.http.get("gToH").query(&[("date", &date)]);
        let body = self.http.execute(req).await?;
        complete(decode(&body)?, &date)
    }
}

fn check_month(month: u8) -> Result<(), AladhanError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(AladhanError::Config(format!(
            "Hijri month must be within 1..=12, got {month}"
        )))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AladhanError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if envelope.code != 200 {
        return Err(AladhanError::Api {
            code: envelope.code,
            status: envelope.status,
        });
    }
    Ok(envelope.data)
}

fn complete(record: DayRecord, date: &str) -> Result<DayRecord, AladhanError> {
    if record.hijri.is_some() && record.gregorian.is_some() {
        Ok(record)
    } else {
        Err(AladhanError::InvalidResponse(format!(
            "conversion of {date} lacks the hijri or gregorian object"
        )))
    }
}
