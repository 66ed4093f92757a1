// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar loading and query tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use icsweek_core::{Calendar, Error, FetchConfig, FetchError, Fetcher, ParseOptions, Source};
use jiff::Zoned;
use jiff::civil::date;
use jiff::tz::TimeZone;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEAM_ICS: &str = "\
BEGIN:VCALENDAR\r
VERSION:2.0\r
BEGIN:VEVENT\r
UID:retro\r
DTSTART:20240315T150000\r
DTEND:20240315T160000\r
SUMMARY:Retro\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:planning\r
DTSTART:20240311T090000\r
DTEND:20240311T100000\r
SUMMARY:Planning\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:offsite\r
DTSTART:20240320T090000\r
SUMMARY:Offsite\r
END:VEVENT\r
END:VCALENDAR\r
";

fn utc() -> ParseOptions {
    ParseOptions::with_time_zone(TimeZone::UTC)
}

fn at(y: i16, m: i8, d: i8, h: i8, min: i8) -> Zoned {
    date(y, m, d).at(h, min, 0, 0).to_zoned(TimeZone::UTC).unwrap()
}

fn uids(events: &[icsweek_core::EventRecord]) -> Vec<&str> {
    events.iter().filter_map(|e| e.uid()).collect()
}

#[test]
fn queries_before_load_see_nothing() {
    let calendar = Calendar::new(utc());
    assert!(calendar.events().is_empty());
    assert!(calendar.future_events().is_empty());
    assert!(calendar.this_week_events().unwrap().is_empty());
    assert!(calendar.next_event().is_none());
}

#[test]
fn queries_over_parsed_text() {
    let calendar = Calendar::from_text(TEAM_ICS, utc());
    assert_eq!(uids(&calendar.events()), ["planning", "retro", "offsite"]);

    // Wednesday 2024-03-13
    let now = at(2024, 3, 13, 12, 0);
    assert_eq!(uids(&calendar.future_events_at(&now)), ["retro", "offsite"]);
    assert_eq!(
        uids(&calendar.this_week_events_at(&now).unwrap()),
        ["planning", "retro"]
    );
    assert_eq!(
        calendar.next_event_at(&now).and_then(|e| e.uid().map(str::to_owned)),
        Some("retro".to_string())
    );
}

#[test]
fn boundaries_follow_current_time() {
    let calendar = Calendar::new(utc());
    let day = calendar.day_start().unwrap();
    let start = calendar.week_start().unwrap();
    let end = calendar.week_end().unwrap();

    assert!(start <= day);
    assert!(day < end);
    assert_eq!(start.weekday(), jiff::civil::Weekday::Sunday);
    assert_eq!(start.hour(), 0);
}

#[test]
fn reload_replaces_events() {
    let calendar = Calendar::from_text(TEAM_ICS, utc());
    let before = calendar.events();

    let count = calendar.load_str("BEGIN:VEVENT\nUID:only\nEND:VEVENT\n");

    assert_eq!(count, 1);
    assert_eq!(before.len(), 3);
    assert_eq!(uids(&calendar.events()), ["only"]);
}

#[tokio::test]
async fn loads_from_http() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team.ics"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TEAM_ICS, "text/calendar"))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let calendar = Calendar::new(utc());
    let source = Source::url(format!("{}/team.ics", mock_server.uri()));

    assert_eq!(calendar.load(&source, &fetcher).await.unwrap(), 3);
    assert_eq!(calendar.events().len(), 3);
}

#[tokio::test]
async fn failed_load_is_reported_and_keeps_events() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team.ics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let calendar = Calendar::from_text(TEAM_ICS, utc());
    let source = Source::url(format!("{}/team.ics", mock_server.uri()));

    let err = calendar.load(&source, &fetcher).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Fetch(FetchError::Status { status: 500, .. })
    ));
    assert_eq!(calendar.events().len(), 3);
}

#[tokio::test]
async fn spawn_runs_callback_after_parse() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team.ics"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TEAM_ICS, "text/calendar"))
        .mount(&mock_server)
        .await;

    let seen = Arc::new(AtomicUsize::new(0));
    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let source = Source::url(format!("{}/team.ics", mock_server.uri()));
    let (calendar, task) = Calendar::spawn(source, fetcher, utc(), {
        let seen = Arc::clone(&seen);
        move |calendar| seen.store(calendar.events().len(), Ordering::SeqCst)
    });

    assert_eq!(task.await.unwrap().unwrap(), 3);
    assert_eq!(seen.load(Ordering::SeqCst), 3);
    assert_eq!(calendar.events().len(), 3);
}

#[tokio::test]
async fn spawn_reports_failure_without_callback() {
    let called = Arc::new(AtomicUsize::new(0));
    let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
    let source = Source::File("/nonexistent/icsweek/team.ics".into());
    let (calendar, task) = Calendar::spawn(source, fetcher, utc(), {
        let called = Arc::clone(&called);
        move |_| {
            called.fetch_add(1, Ordering::SeqCst);
        }
    });

    let result = task.await.unwrap();
    assert!(matches!(result, Err(Error::Fetch(FetchError::Io { .. }))));
    assert_eq!(called.load(Ordering::SeqCst), 0);
    assert!(calendar.events().is_empty());
}
