//! Rendered pages, health check, static assets and response headers.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use tides_core::demo_record;
use tides_integration_tests::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let resp = app.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_home_page_renders_wedding() {
    let app = TestApp::new();
    let resp = app.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.header("content-type").unwrap().starts_with("text/html"));
    assert!(resp.body.contains("Isabella"));
    assert!(resp.body.contains("Alessandro"));
    assert!(resp.body.contains("Two hearts, one ocean, endless love"));
    assert!(resp.body.contains("Thursday, August 15, 2024"));
    assert!(resp.body.contains("Sunset Cliffs Resort"));
    assert!(resp.body.contains("Ceremony begins at sunset"));
}

#[tokio::test]
async fn test_home_page_timeline_in_supplied_order() {
    let app = TestApp::new();
    let body = app.get("/").await.body;

    let first = body.find("First Met").unwrap();
    let proposal = body.find("The Proposal").unwrap();
    let wedding = body.find("Our Wedding Day").unwrap();
    assert!(first < proposal && proposal < wedding);
}

#[tokio::test]
async fn test_home_page_travel_sections() {
    let body = TestApp::new().get("/").await.body;
    for title in ["Getting There", "Where to Stay", "Things to Do", "Local Tips"] {
        assert!(body.contains(title), "missing {title}");
    }
    assert!(body.contains("Santorini Airport (JTR)"));
}

#[tokio::test]
async fn test_home_page_initial_countdown_is_padded() {
    // One day before the ceremony
    let body = TestApp::new().get("/").await.body;
    assert!(body.contains(r#"data-countdown-unit="days">01<"#));
    assert!(body.contains(r#"data-countdown-unit="hours">00<"#));
    assert!(body.contains(r#"data-target="2024-08-15T17:00:00+00:00""#));
}

#[tokio::test]
async fn test_hero_theme_follows_store_clock() {
    let app = TestApp::with_record(
        demo_record(),
        Utc.with_ymd_and_hms(2024, 8, 10, 17, 0, 0).unwrap(),
    );
    assert!(app.get("/").await.body.contains("hero--sunset"));

    app.clock.set(Utc.with_ymd_and_hms(2024, 8, 10, 9, 0, 0).unwrap());
    assert!(app.get("/").await.body.contains("hero--day"));

    app.clock.set(Utc.with_ymd_and_hms(2024, 8, 10, 23, 0, 0).unwrap());
    assert!(app.get("/").await.body.contains("hero--night"));
}

#[tokio::test]
async fn test_thank_you_page() {
    let resp = TestApp::new().get("/thank-you").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Back to Wedding"));
    assert!(resp.body.contains(r##"href="/#guestbook""##));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = TestApp::new();
    assert_eq!(app.get("/static/js/countdown.js").await.status, StatusCode::OK);
    assert_eq!(app.get("/static/css/site.css").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let resp = TestApp::new().get("/no-such-page").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let resp = TestApp::new().get("/").await;
    assert_eq!(resp.header("x-frame-options"), Some("DENY"));
    assert_eq!(resp.header("x-content-type-options"), Some("nosniff"));
    assert!(
        resp.header("content-security-policy")
            .unwrap()
            .contains("https://images.unsplash.com")
    );
    assert!(resp.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_upstream_request_id_is_echoed() {
    let app = TestApp::new();
    let request = axum::http::Request::get("/health")
        .header("x-request-id", "edge-1234")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.send(request).await;
    assert_eq!(resp.header("x-request-id"), Some("edge-1234"));
}
