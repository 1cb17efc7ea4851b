// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use jiff::civil::Date;
use takwim_aladhan::{AladhanClient, AladhanError, DayRecord, format_dmy};

use crate::cache::TtlCache;

/// Where Hijri/Gregorian conversions come from.
#[async_trait]
pub trait ConversionSource: Send + Sync {
    /// Day records of one Hijri month.
    async fn hijri_month(&self, year: u16, month: u8) -> Result<Vec<DayRecord>, AladhanError>;

    /// Conversion of a single Hijri date.
    async fn hijri_day(&self, day: u8, month: u8, year: u16) -> Result<DayRecord, AladhanError>;

    /// Conversion of a single Gregorian date.
    async fn gregorian_day(&self, date: Date) -> Result<DayRecord, AladhanError>;
}

#[async_trait]
impl ConversionSource for AladhanClient {
    async fn hijri_month(&self, year: u16, month: u8) -> Result<Vec<DayRecord>, AladhanError> {
        self.hijri_calendar(year, month).await
    }

    async fn hijri_day(&self, day: u8, month: u8, year: u16) -> Result<DayRecord, AladhanError> {
        self.hijri_to_gregorian(day, month, year).await
    }

    async fn gregorian_day(&self, date: Date) -> Result<DayRecord, AladhanError> {
        self.gregorian_to_hijri(date).await
    }
}

/// Remembers successful answers of another source for a fixed time.
///
/// Month tables are keyed by `(year, month)`, single dates by their
/// `DD-MM-YYYY` string. Failures are never cached.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    months: TtlCache<(u16, u8), Vec<DayRecord>>,
    hijri_days: TtlCache<String, DayRecord>,
    gregorian_days: TtlCache<String, DayRecord>,
}

impl<S: ConversionSource> CachedSource<S> {
    /// Wraps `inner`, keeping answers for `ttl`.
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            months: TtlCache::new(ttl),
            hijri_days: TtlCache::new(ttl),
            gregorian_days: TtlCache::new(ttl),
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ConversionSource> ConversionSource for CachedSource<S> {
    async fn hijri_month(&self, year: u16, month: u8) -> Result<Vec<DayRecord>, AladhanError> {
        if let Some(records) = self.months.get(&(year, month)) {
            tracing::trace!(year, month, "month cache hit");
            return Ok(records);
        }

        let records = self.inner.hijri_month(year, month).await?;
        self.months.insert((year, month), records.clone());
        Ok(records)
    }

    async fn hijri_day(&self, day: u8, month: u8, year: u16) -> Result<DayRecord, AladhanError> {
        let key = format!("{day:02}-{month:02}-{year}");
        if let Some(record) = self.hijri_days.get(&key) {
            tracing::trace!(%key, "hijri date cache hit");
            return Ok(record);
        }

        let record = self.inner.hijri_day(day, month, year).await?;
        self.hijri_days.insert(key, record.clone());
        Ok(record)
    }

    async fn gregorian_day(&self, date: Date) -> Result<DayRecord, AladhanError> {
        let key = format_dmy(date);
        if let Some(record) = self.gregorian_days.get(&key) {
            tracing::trace!(%key, "gregorian date cache hit");
            return Ok(record);
        }

        let record = self.inner.gregorian_day(date).await?;
        self.gregorian_days.insert(key, record.clone());
        Ok(record)
    }
}
