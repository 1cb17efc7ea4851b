// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::Zoned;
use jiff::civil::Date;
use takwim_aladhan::{AladhanClient, DayRecord};

use crate::builder::{CalendarBuild, Issue, build_month, build_year};
use crate::config::Config;
use crate::filter::{Upcoming, filter_rows, find_upcoming};
use crate::occasion::LabelOptions;
use crate::row::{RowError, parse_gregorian};
use crate::source::{CachedSource, ConversionSource};

/// Takwim calendar application core.
#[derive(Debug)]
pub struct Takwim<S = CachedSource<AladhanClient>> {
    now: Zoned,
    config: Config,
    source: S,
}

impl Takwim {
    /// Creates a new instance talking to the configured conversion API.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let client = AladhanClient::new(config.api.clone())
            .map_err(|e| format!("Failed to create API client: {e}"))?;
        let source = CachedSource::new(client, config.cache_ttl());
        Ok(Self::with_source(config, source))
    }
}

impl<S: ConversionSource> Takwim<S> {
    /// Creates an instance on top of any conversion source.
    pub fn with_source(config: Config, source: S) -> Self {
        Self {
            now: Zoned::now(),
            config,
            source,
        }
    }

    /// The current time in the instance.
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Pins the current time.
    #[must_use]
    pub fn with_now(mut self, now: Zoned) -> Self {
        self.now = now;
        self
    }

    /// Today's local Gregorian date.
    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The conversion source in use.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Labeling switches from the configuration.
    pub fn label_options(&self) -> LabelOptions {
        self.config.label_options()
    }

    /// Hijri date of today.
    pub async fn today_hijri(&self) -> Result<Today, Box<dyn Error>> {
        self.hijri_of(self.today()).await
    }

    /// Hijri date of a Gregorian day.
    #[tracing::instrument(skip(self))]
    pub async fn hijri_of(&self, date: Date) -> Result<Today, Box<dyn Error>> {
        let record = self
            .source
            .gregorian_day(date)
            .await
            .map_err(|e| format!("Failed to convert {date} to Hijri: {e}"))?;
        Ok(Today::from_record(&record)?)
    }

    /// Builds the labeled calendar for a query.
    pub async fn calendar(&self, query: &CalendarQuery) -> CalendarBuild {
        tracing::debug!(?query, "building calendar");
        let mut build = match query.month {
            Some(month) => build_month(&self.source, query.year, month, query.options).await,
            None => build_year(&self.source, query.year, query.options).await,
        };

        if query.only_labeled {
            build.rows = filter_rows(&build.rows, true, None);
        }
        build
    }

    /// Labeled days from today on, at most `limit`, looking into the next
    /// Hijri year when the given one runs out.
    pub async fn upcoming(
        &self,
        year: u16,
        options: LabelOptions,
        limit: usize,
    ) -> (Vec<Upcoming>, Vec<Issue>) {
        let today = self.today();
        let mut build = build_year(&self.source, year, options).await;
        let mut upcoming = find_upcoming(&build.rows, today, limit);

        if upcoming.len() < limit {
            if let Some(next) = year.checked_add(1) {
                tracing::debug!(year = next, "looking into the next Hijri year");
                let more = build_year(&self.source, next, options).await;
                build.rows.extend(more.rows);
                build.issues.extend(more.issues);
                upcoming = find_upcoming(&build.rows, today, limit);
            }
        }

        (upcoming, build.issues)
    }
}

/// What to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarQuery {
    /// Hijri year.
    pub year: u16,
    /// A single Hijri month, or the whole year.
    pub month: Option<u8>,
    /// Keep only labeled days.
    pub only_labeled: bool,
    /// Labeling switches.
    pub options: LabelOptions,
}

impl CalendarQuery {
    /// The whole year with default switches.
    pub fn year(year: u16) -> Self {
        Self {
            year,
            month: None,
            only_labeled: false,
            options: LabelOptions::default(),
        }
    }
}

/// The Hijri side of a Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Today {
    /// Gregorian date.
    pub gregorian: Date,
    /// English Gregorian weekday.
    pub weekday: String,
    /// Arabic weekday, when given.
    pub weekday_ar: Option<String>,
    /// Hijri date, `DD-MM-YYYY`.
    pub hijri: String,
    /// Hijri day of month.
    pub day: u8,
    /// Hijri month number.
    pub month: u8,
    /// English Hijri month name.
    pub month_en: String,
    /// Arabic Hijri month name, when given.
    pub month_ar: Option<String>,
    /// Hijri year.
    pub year: u16,
    /// Holidays the API reports for the day.
    pub holidays: Vec<String>,
}

impl Today {
    /// Reads a conversion record.
    pub fn from_record(record: &DayRecord) -> Result<Self, RowError> {
        let hijri = record.hijri.as_ref().ok_or(RowError::Missing("hijri"))?;
        let gregorian = record
            .gregorian
            .as_ref()
            .ok_or(RowError::Missing("gregorian"))?;

        let g_date = gregorian
            .date
            .as_deref()
            .ok_or(RowError::Missing("gregorian.date"))?;
        let month = hijri.month.as_ref().ok_or(RowError::Missing("hijri.month"))?;

        Ok(Self {
            gregorian: parse_gregorian(g_date)?,
            weekday: gregorian
                .weekday
                .as_ref()
                .and_then(|a| a.en.clone())
                .unwrap_or_default(),
            weekday_ar: hijri.weekday.as_ref().and_then(|a| a.ar.clone()),
            hijri: hijri.date.clone().ok_or(RowError::Missing("hijri.date"))?,
            day: hijri.day.ok_or(RowError::Missing("hijri.day"))?,
            month: month.number.ok_or(RowError::Missing("hijri.month.number"))?,
            month_en: month.en.clone().unwrap_or_default(),
            month_ar: month.ar.clone(),
            year: hijri.year.ok_or(RowError::Missing("hijri.year"))?,
            holidays: hijri.holidays.clone(),
        })
    }
}
