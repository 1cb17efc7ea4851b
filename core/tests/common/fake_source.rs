// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! An in-memory conversion source.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jiff::civil::Date;
use takwim_core::{AladhanError, ConversionSource, DayRecord};

/// Answers from fixed tables and records every call.
///
/// Unknown months answer "not found"; unknown single dates fail as if the
/// upstream were down.
#[derive(Debug, Default)]
pub struct FakeSource {
    months: HashMap<(u16, u8), Result<Vec<DayRecord>, AladhanError>>,
    days: HashMap<(u8, u8, u16), DayRecord>,
    gregorian: HashMap<Date, DayRecord>,
    month_calls: AtomicUsize,
    day_calls: Mutex<Vec<(u8, u8, u16)>>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(mut self, year: u16, month: u8, records: Vec<DayRecord>) -> Self {
        self.months.insert((year, month), Ok(records));
        self
    }

    pub fn with_month_error(mut self, year: u16, month: u8, error: AladhanError) -> Self {
        self.months.insert((year, month), Err(error));
        self
    }

    pub fn with_day(mut self, day: u8, month: u8, year: u16, record: DayRecord) -> Self {
        self.days.insert((day, month, year), record);
        self
    }

    pub fn with_gregorian(mut self, date: Date, record: DayRecord) -> Self {
        self.gregorian.insert(date, record);
        self
    }

    pub fn month_calls(&self) -> usize {
        self.month_calls.load(Ordering::SeqCst)
    }

    pub fn day_calls(&self) -> Vec<(u8, u8, u16)> {
        self.day_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversionSource for FakeSource {
    async fn hijri_month(&self, year: u16, month: u8) -> Result<Vec<DayRecord>, AladhanError> {
        self.month_calls.fetch_add(1, Ordering::SeqCst);
        self.months
            .get(&(year, month))
            .cloned()
            .unwrap_or_else(|| Err(AladhanError::NotFound(format!("/hToGCalendar/{year}/{month}"))))
    }

    async fn hijri_day(&self, day: u8, month: u8, year: u16) -> Result<DayRecord, AladhanError> {
        self.day_calls.lock().unwrap().push((day, month, year));
        self.days
            .get(&(day, month, year))
            .cloned()
            .ok_or_else(|| AladhanError::Http("connection refused".to_string()))
    }

    async fn gregorian_day(&self, date: Date) -> Result<DayRecord, AladhanError> {
        self.gregorian
            .get(&date)
            .cloned()
            .ok_or_else(|| AladhanError::Http("connection refused".to_string()))
    }
}
