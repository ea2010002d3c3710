//! Admin dashboard tabs and the JSON export download.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use tides_integration_tests::TestApp;

async fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.post_form(
        "/rsvp",
        &[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("guests", "2"),
            ("attending", "yes"),
        ],
    )
    .await;
    app.post_form(
        "/rsvp",
        &[
            ("name", "Tom"),
            ("email", "tom@x.com"),
            ("guests", "1"),
            ("attending", "no"),
        ],
    )
    .await;
    app.post_form("/guestbook", &[("name", "Maria"), ("message", "Congratulations!")])
        .await;
    app
}

#[tokio::test]
async fn test_empty_dashboard() {
    let app = TestApp::new();

    let rsvps = app.get("/admin").await;
    assert_eq!(rsvps.status, StatusCode::OK);
    assert!(
        rsvps
            .body
            .contains("No RSVPs yet. Share your wedding link to get responses!")
    );

    let guestbook = app.get("/admin?tab=guestbook").await;
    assert!(
        guestbook
            .body
            .contains("No messages yet. Guests can leave messages in the guestbook!")
    );
}

#[tokio::test]
async fn test_dashboard_counts() {
    let app = seeded_app().await;
    let body = app.get("/admin?tab=rsvps").await.body;

    assert!(body.contains("RSVPs (2)"));
    assert!(body.contains("Guestbook (1)"));
    assert!(body.contains("Not Attending"));
    assert!(body.contains(r#"<span class="admin__stat-value">1</span>"#));
}

#[tokio::test]
async fn test_settings_tab_is_read_only_summary() {
    let body = TestApp::new().get("/admin?tab=settings").await.body;
    assert!(body.contains("Isabella"));
    assert!(body.contains("Thursday, August 15, 2024"));
    assert!(body.contains("Sunset Cliffs Resort"));
    assert!(!body.contains("<form"));
}

#[tokio::test]
async fn test_unknown_tab_falls_back_to_rsvps() {
    let body = TestApp::new().get("/admin?tab=billing").await.body;
    assert!(body.contains("No RSVPs yet"));
}

#[tokio::test]
async fn test_export_download() {
    let app = seeded_app().await;
    let resp = app.get("/admin/export").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("content-type"), Some("application/json"));
    assert_eq!(
        resp.header("content-disposition"),
        Some(r#"attachment; filename="wedding-data-2024-08-14.json""#)
    );

    let export = resp.json();
    assert_eq!(export["exportDate"], "2024-08-14T17:00:00Z");
    assert_eq!(export["rsvps"].as_array().unwrap().len(), 2);
    assert_eq!(export["rsvps"][0]["name"], "Jane");
    assert_eq!(export["rsvps"][1]["attending"], "no");
    assert_eq!(
        export["guestbook"][0],
        json!({
            "id": 1,
            "name": "Maria",
            "message": "Congratulations!",
            "timestamp": "2024-08-14T17:00:00Z"
        })
    );
    // Pretty-printed with two-space indentation
    assert!(resp.body.starts_with("{\n  \""));
}
