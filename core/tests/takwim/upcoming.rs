// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use jiff::tz::TimeZone;
use takwim_core::{AYYAM_AL_BIDH_LABEL, Config, LabelOptions, Takwim, THURSDAY_FASTING_LABEL};

use crate::common::{FakeSource, RAMADAN_1447_START, SHAWWAL_1447_START, month_records};

fn takwim() -> Takwim<FakeSource> {
    let source = FakeSource::new()
        .with_month(1447, 9, month_records(9, 1447, RAMADAN_1447_START, 30))
        .with_month(1447, 10, month_records(10, 1447, SHAWWAL_1447_START, 29));
    let now = date(2026, 2, 19).to_zoned(TimeZone::UTC).unwrap();
    Takwim::with_source(Config::default(), source).with_now(now)
}

#[tokio::test]
async fn upcoming_starts_today() {
    let takwim = takwim();
    let (upcoming, issues) = takwim.upcoming(1447, LabelOptions::default(), 5).await;

    assert_eq!(upcoming.len(), 5);
    assert_eq!(upcoming[0].row.gregorian, date(2026, 2, 19));
    assert_eq!(upcoming[0].days_left, 0);
    assert_eq!(upcoming[0].row.labels, vec![THURSDAY_FASTING_LABEL]);

    assert_eq!(upcoming[3].row.gregorian, date(2026, 3, 2));
    assert_eq!(upcoming[3].days_left, 11);
    assert_eq!(upcoming[4].row.labels, vec![AYYAM_AL_BIDH_LABEL]);

    // the other ten months could not be fetched
    assert!(!issues.is_empty());
    assert_eq!(takwim.source().month_calls(), 12);
}

#[tokio::test]
async fn upcoming_looks_into_next_year() {
    let takwim = takwim();
    let options = LabelOptions {
        weekday_fasting: false,
        tasua: true,
    };
    let (upcoming, _) = takwim.upcoming(1447, options, 10).await;

    assert_eq!(upcoming.len(), 8);
    assert_eq!(upcoming[0].row.gregorian, date(2026, 3, 2));
    assert_eq!(upcoming[4].row.labels, vec!["Idul Fitri"]);
    assert_eq!(upcoming[4].days_left, 29);
    assert_eq!(takwim.source().month_calls(), 24);
}
