// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use jiff::civil::date;
use takwim_core::{
    CachedSource, CalendarQuery, Config, ConversionSource, LabelOptions, Takwim,
};

use crate::common::{FakeSource, RAMADAN_1447_START, day_record, month_records};

fn cached(source: FakeSource, ttl: Duration) -> CachedSource<FakeSource> {
    CachedSource::new(source, ttl)
}

#[tokio::test]
async fn month_tables_are_fetched_once() {
    let source = cached(
        FakeSource::new().with_month(1447, 9, month_records(9, 1447, RAMADAN_1447_START, 30)),
        Duration::from_secs(3600),
    );

    let first = source.hijri_month(1447, 9).await.unwrap();
    let second = source.hijri_month(1447, 9).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(source.inner().month_calls(), 1);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let source = cached(FakeSource::new(), Duration::from_secs(3600));

    assert!(source.hijri_month(1447, 1).await.is_err());
    assert!(source.hijri_month(1447, 1).await.is_err());
    assert_eq!(source.inner().month_calls(), 2);

    assert!(source.hijri_day(13, 1, 1447).await.is_err());
    assert!(source.hijri_day(13, 1, 1447).await.is_err());
    assert_eq!(source.inner().day_calls().len(), 2);
}

#[tokio::test]
async fn single_dates_are_cached_by_date() {
    let record = day_record(13, 9, 1447, date(2026, 3, 2));
    let source = cached(
        FakeSource::new().with_day(13, 9, 1447, record.clone()),
        Duration::from_secs(3600),
    );

    assert_eq!(source.hijri_day(13, 9, 1447).await.unwrap(), record);
    assert_eq!(source.hijri_day(13, 9, 1447).await.unwrap(), record);
    assert_eq!(source.inner().day_calls().len(), 1);
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let source = cached(
        FakeSource::new().with_month(1447, 9, month_records(9, 1447, RAMADAN_1447_START, 30)),
        Duration::ZERO,
    );

    source.hijri_month(1447, 9).await.unwrap();
    source.hijri_month(1447, 9).await.unwrap();
    assert_eq!(source.inner().month_calls(), 2);
}

#[tokio::test]
async fn repeated_render_passes_share_the_cache() {
    let source = cached(
        FakeSource::new().with_month(1447, 9, month_records(9, 1447, RAMADAN_1447_START, 30)),
        Config::default().cache_ttl(),
    );
    let takwim = Takwim::with_source(Config::default(), source);

    let query = CalendarQuery {
        month: Some(9),
        ..CalendarQuery::year(1447)
    };
    let first = takwim.calendar(&query).await;

    let query = CalendarQuery {
        options: LabelOptions {
            weekday_fasting: false,
            tasua: true,
        },
        ..query
    };
    let second = takwim.calendar(&query).await;

    assert_eq!(takwim.source().inner().month_calls(), 1);
    assert_eq!(first.rows.len(), second.rows.len());
    assert_ne!(first.rows[1].labels, second.rows[1].labels);
}
