// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use takwim_core::{BuildStatus, LabelOptions, build_year, fallback_days};

use crate::common::{FakeSource, RAMADAN_1447_START, SHAWWAL_1447_START, month_records};

#[tokio::test]
async fn year_is_fetched_month_by_month_and_sorted() {
    // Shawwal first so that insertion order differs from date order.
    let source = FakeSource::new()
        .with_month(1447, 10, month_records(10, 1447, SHAWWAL_1447_START, 29))
        .with_month(1447, 9, month_records(9, 1447, RAMADAN_1447_START, 30));

    let build = build_year(&source, 1447, LabelOptions::default()).await;

    assert_eq!(source.month_calls(), 12);
    assert_eq!(build.rows.len(), 59);
    assert!(build.rows.windows(2).all(|a| a[0].gregorian <= a[1].gregorian));

    let fallback: Vec<u8> = (1..=12).filter(|a| *a != 9 && *a != 10).collect();
    assert_eq!(build.fallback_months, fallback);

    let single_dates: usize = fallback.iter().map(|m| fallback_days(*m).len()).sum();
    assert_eq!(source.day_calls().len(), single_dates);
    assert_eq!(build.status(), BuildStatus::Partial);

    let eid = build
        .rows
        .iter()
        .find(|a| a.labels.iter().any(|l| l == "Idul Fitri"))
        .unwrap();
    assert_eq!(eid.gregorian, SHAWWAL_1447_START);
    assert_eq!(eid.h_month_en, "Shawwāl");
}
