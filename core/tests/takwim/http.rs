// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end runs against a mocked conversion API.

use jiff::ToSpan;
use jiff::civil::{Date, date};
use serde_json::{Value, json};
use takwim_core::{AladhanConfig, BuildStatus, CalendarQuery, Config, IssueKind, Takwim};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::RAMADAN_1447_START;

fn dmy(date: Date) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

fn day_json(h_day: u8, gregorian: Date) -> Value {
    const WEEKDAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    let weekday = WEEKDAYS[usize::from(gregorian.weekday().to_monday_zero_offset().unsigned_abs())];
    json!({
        "hijri": {
            "date": format!("{h_day:02}-09-1447"),
            "day": format!("{h_day:02}"),
            "weekday": {"en": "", "ar": ""},
            "month": {"number": 9, "en": "Ramaḍān", "ar": "رَمَضان", "days": 30},
            "year": "1447",
            "holidays": []
        },
        "gregorian": {
            "date": dmy(gregorian),
            "day": format!("{:02}", gregorian.day()),
            "weekday": {"en": weekday},
            "month": {"number": gregorian.month(), "en": ""},
            "year": gregorian.year().to_string()
        }
    })
}

fn ramadan_day(h_day: u8) -> Date {
    RAMADAN_1447_START
        .checked_add(i32::from(h_day - 1).days())
        .unwrap()
}

fn takwim(server: &MockServer) -> Takwim {
    let config = Config {
        api: AladhanConfig::with_base_url(server.uri()),
        ..Default::default()
    };
    Takwim::new(config).unwrap()
}

fn ramadan_query() -> CalendarQuery {
    CalendarQuery {
        month: Some(9),
        ..CalendarQuery::year(1447)
    }
}

#[tokio::test]
async fn fetches_and_labels_a_month() {
    let mock_server = MockServer::start().await;
    let data: Vec<Value> = (1..=30).map(|d| day_json(d, ramadan_day(d))).collect();
    Mock::given(method("GET"))
        .and(path("/hToGCalendar/1447/9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 200, "status": "OK", "data": data})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let takwim = takwim(&mock_server);
    let build = takwim.calendar(&ramadan_query()).await;
    // second pass is served from the cache
    let again = takwim.calendar(&ramadan_query()).await;

    assert_eq!(build.status(), BuildStatus::Complete);
    assert_eq!(build.rows.len(), 30);
    assert_eq!(build.rows[0].gregorian, date(2026, 2, 18));
    assert_eq!(build.rows[0].labels, vec!["Awal Ramadhan"]);
    assert_eq!(build.rows[16].labels, vec!["Nuzulul Qur'an"]);
    assert_eq!(build, again);
}

#[tokio::test]
async fn missing_month_falls_back_to_single_dates() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hToGCalendar/1447/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    for day in [1, 13, 15, 17] {
        Mock::given(method("GET"))
            .and(path("/hToG"))
            .and(query_param("date", format!("{day:02}-09-1447")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "status": "OK",
                "data": day_json(day, ramadan_day(day)),
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/hToG"))
        .and(query_param("date", "14-09-1447"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let build = takwim(&mock_server).calendar(&ramadan_query()).await;

    let days: Vec<u8> = build.rows.iter().map(|a| a.h_day).collect();
    assert_eq!(days, vec![1, 13, 15, 17]);
    assert_eq!(build.fallback_months, vec![9]);
    assert_eq!(build.status(), BuildStatus::Partial);

    let kinds: Vec<IssueKind> = build.issues.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![IssueKind::NoData, IssueKind::UpstreamUnavailable]);
}

#[tokio::test]
async fn converts_today() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gToH"))
        .and(query_param("date", "02-03-2026"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "status": "OK",
            "data": day_json(13, date(2026, 3, 2)),
        })))
        .mount(&mock_server)
        .await;

    let today = takwim(&mock_server)
        .hijri_of(date(2026, 3, 2))
        .await
        .unwrap();

    assert_eq!(today.hijri, "13-09-1447");
    assert_eq!(today.weekday, "Monday");
    assert_eq!(today.month_ar.as_deref(), Some("رَمَضان"));
}

#[tokio::test]
async fn unreachable_api_is_reported_as_unavailable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let build = takwim(&mock_server).calendar(&ramadan_query()).await;
    assert!(build.rows.is_empty());
    assert_eq!(build.status(), BuildStatus::Unavailable);
}
