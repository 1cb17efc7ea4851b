// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use takwim_core::{
    AYYAM_AL_BIDH_LABEL, AladhanError, BuildStatus, IssueKind, IssueScope, LabelOptions,
    build_month,
};

use crate::common::{FakeSource, RAMADAN_1447_START, day_record};

const SINGLE_DATES: [u8; 5] = [1, 13, 14, 15, 17];

fn with_ramadan_days(mut source: FakeSource) -> FakeSource {
    for day in SINGLE_DATES {
        let gregorian = RAMADAN_1447_START
            .checked_add(i32::from(day - 1).days())
            .unwrap();
        source = source.with_day(day, 9, 1447, day_record(day, 9, 1447, gregorian));
    }
    source
}

#[tokio::test]
async fn missing_month_is_synthesized_from_single_dates() {
    let source = with_ramadan_days(FakeSource::new());
    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    let calls: Vec<u8> = source.day_calls().iter().map(|a| a.0).collect();
    assert_eq!(calls, SINGLE_DATES);
    assert_eq!(build.fallback_months, vec![9]);

    let days: Vec<u8> = build.rows.iter().map(|a| a.h_day).collect();
    assert_eq!(days, SINGLE_DATES);
    assert_eq!(build.rows[0].labels, vec!["Awal Ramadhan"]);
    assert!(build.rows[1].labels.contains(&AYYAM_AL_BIDH_LABEL.to_string()));
    assert_eq!(build.rows[4].labels, vec!["Nuzulul Qur'an"]);

    assert_eq!(build.issues.len(), 1);
    assert_eq!(build.issues[0].kind, IssueKind::NoData);
    assert_eq!(
        build.issues[0].scope,
        IssueScope::Month {
            year: 1447,
            month: 9
        }
    );
}

#[tokio::test]
async fn failing_single_dates_are_dropped() {
    let source = FakeSource::new();
    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    assert!(build.rows.is_empty());
    assert_eq!(source.day_calls().len(), SINGLE_DATES.len());
    assert_eq!(build.status(), BuildStatus::Unavailable);

    let day_issues: Vec<_> = build
        .issues
        .iter()
        .filter(|a| matches!(a.scope, IssueScope::Day { .. }))
        .collect();
    assert_eq!(day_issues.len(), SINGLE_DATES.len());
    assert!(
        day_issues
            .iter()
            .all(|a| a.kind == IssueKind::UpstreamUnavailable)
    );
}

#[tokio::test]
async fn empty_month_table_falls_back() {
    let source = with_ramadan_days(FakeSource::new().with_month(1447, 9, vec![]));
    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    assert_eq!(build.fallback_months, vec![9]);
    assert_eq!(build.rows.len(), SINGLE_DATES.len());
    assert_eq!(build.issues[0].kind, IssueKind::NoData);
}

#[tokio::test]
async fn upstream_failure_falls_back() {
    let source = with_ramadan_days(FakeSource::new().with_month_error(
        1447,
        9,
        AladhanError::Http("503 Service Unavailable: maintenance".to_string()),
    ));
    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    assert_eq!(build.fallback_months, vec![9]);
    assert_eq!(build.rows.len(), SINGLE_DATES.len());
    assert_eq!(build.issues[0].kind, IssueKind::UpstreamUnavailable);
    assert_eq!(build.status(), BuildStatus::Partial);
}

#[tokio::test]
async fn partially_failing_fallback_keeps_what_arrived() {
    let gregorian = RAMADAN_1447_START.checked_add(12.days()).unwrap();
    let source = FakeSource::new().with_day(13, 9, 1447, day_record(13, 9, 1447, gregorian));
    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    assert_eq!(build.rows.len(), 1);
    assert_eq!(build.rows[0].h_day, 13);
    assert_eq!(build.status(), BuildStatus::Partial);
    assert_eq!(build.issues.len(), 1 + SINGLE_DATES.len() - 1);
}
