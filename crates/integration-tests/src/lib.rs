//! Integration tests for Tides of Love.
//!
//! The site router is built in-process and driven with
//! `tower::ServiceExt::oneshot`, so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tides-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `site_pages` - Rendered pages, health and static assets
//! - `rsvp_flow` - RSVP form through to the admin dashboard
//! - `guestbook_flow` - Guestbook form and entry ordering
//! - `api` - JSON API
//! - `admin_export` - Dashboard tabs and the JSON download

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use tides_core::{FixedClock, WeddingRecord, WeddingStore, demo_record};
use tides_site::config::SiteConfig;
use tides_site::state::AppState;

/// One day before the demo ceremony (2024-08-15T17:00:00Z).
#[must_use]
pub fn day_before() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 14, 17, 0, 0).unwrap()
}

/// A response collected into memory.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// The site router over a store with a fixed clock.
pub struct TestApp {
    pub router: Router,
    pub store: WeddingStore,
    pub clock: FixedClock,
}

impl TestApp {
    /// Demo wedding, clock one day before the ceremony.
    #[must_use]
    pub fn new() -> Self {
        Self::with_record(demo_record(), day_before())
    }

    #[must_use]
    pub fn with_record(record: WeddingRecord, now: DateTime<Utc>) -> Self {
        let clock = FixedClock::new(now);
        let store = WeddingStore::with_clock(record, clock.clone());
        let state = AppState::new(SiteConfig::default(), store.clone());
        Self {
            router: tides_site::app(state),
            store,
            clock,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    /// Submit `fields` as an urlencoded form.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
