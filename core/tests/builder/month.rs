// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use takwim_core::{
    AYYAM_AL_BIDH_LABEL, BuildStatus, IssueKind, LabelOptions, MONDAY_FASTING_LABEL,
    THURSDAY_FASTING_LABEL, build_month,
};

use crate::common::{FakeSource, RAMADAN_1447_START, month_records};

fn ramadan() -> FakeSource {
    FakeSource::new().with_month(1447, 9, month_records(9, 1447, RAMADAN_1447_START, 30))
}

#[tokio::test]
async fn labels_every_day_of_a_month() {
    let source = ramadan();
    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    assert_eq!(build.status(), BuildStatus::Complete);
    assert_eq!(build.rows.len(), 30);
    assert!(build.fallback_months.is_empty());
    assert_eq!(source.month_calls(), 1);
    assert!(source.day_calls().is_empty());

    let first = &build.rows[0];
    assert_eq!(first.gregorian, date(2026, 2, 18));
    assert_eq!(first.hijri, "01-09-1447");
    assert_eq!(first.weekday, "Wednesday");
    assert_eq!(first.labels, vec!["Awal Ramadhan"]);

    assert_eq!(build.rows[1].labels, vec![THURSDAY_FASTING_LABEL]);
    assert_eq!(
        build.rows[12].labels,
        vec![AYYAM_AL_BIDH_LABEL, MONDAY_FASTING_LABEL]
    );
    assert_eq!(build.rows[16].labels, vec!["Nuzulul Qur'an"]);
}

#[tokio::test]
async fn weekday_fasting_can_be_turned_off() {
    let source = ramadan();
    let options = LabelOptions {
        weekday_fasting: false,
        tasua: true,
    };
    let build = build_month(&source, 1447, 9, options).await;

    assert!(build.rows[1].labels.is_empty());
    assert_eq!(build.rows[12].labels, vec![AYYAM_AL_BIDH_LABEL]);
    assert!(
        build
            .rows
            .iter()
            .flat_map(|a| &a.labels)
            .all(|a| a != MONDAY_FASTING_LABEL && a != THURSDAY_FASTING_LABEL)
    );
}

#[tokio::test]
async fn rows_come_back_in_gregorian_order() {
    let mut records = month_records(9, 1447, RAMADAN_1447_START, 30);
    records.reverse();
    let source = FakeSource::new().with_month(1447, 9, records);

    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;
    assert!(build.rows.windows(2).all(|a| a[0].gregorian < a[1].gregorian));
}

#[tokio::test]
async fn malformed_records_become_issues() {
    let mut records = month_records(9, 1447, RAMADAN_1447_START, 30);
    records[4].gregorian = None;
    let source = FakeSource::new().with_month(1447, 9, records);

    let build = build_month(&source, 1447, 9, LabelOptions::default()).await;

    assert_eq!(build.rows.len(), 29);
    assert_eq!(build.issues.len(), 1);
    assert_eq!(build.issues[0].kind, IssueKind::UnexpectedPayload);
    assert_eq!(build.status(), BuildStatus::Partial);
    assert!(build.rows.iter().all(|a| a.h_day != 5));
}

#[tokio::test]
async fn rejects_invalid_month_without_fetching() {
    let source = ramadan();
    let build = build_month(&source, 1447, 13, LabelOptions::default()).await;

    assert!(build.rows.is_empty());
    assert!(build.fallback_months.is_empty());
    assert_eq!(build.issues.len(), 1);
    assert_eq!(build.issues[0].kind, IssueKind::InvalidRequest);
    assert_eq!(build.status(), BuildStatus::Unavailable);
    assert_eq!(source.month_calls(), 0);
    assert!(source.day_calls().is_empty());
}
