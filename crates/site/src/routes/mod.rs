//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET   /                 - Home page
//! GET   /health           - Health check
//! GET   /thank-you        - Shown after a successful RSVP
//!
//! # Forms (303 on success, 422 with the page re-rendered on error)
//! POST  /rsvp             - RSVP, redirects to /thank-you
//! POST  /guestbook        - Guestbook message, redirects to /#guestbook
//!
//! # Admin
//! GET   /admin            - Dashboard (?tab=rsvps|guestbook|settings)
//! GET   /admin/export     - JSON download of RSVPs and guestbook
//!
//! # JSON API
//! GET   /api/wedding      - Whole wedding record
//! PATCH /api/wedding      - Shallow update of top-level fields
//! POST  /api/rsvps        - Append an RSVP (201)
//! POST  /api/guestbook    - Append a guestbook entry (201)
//! GET   /api/countdown    - Time left until the ceremony
//! ```

pub mod admin;
pub mod api;
pub mod guestbook;
pub mod home;
pub mod rsvp;
pub mod thank_you;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{api_rate_limiter, submission_rate_limiter};
use crate::state::AppState;

/// Create the page router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/thank-you", get(thank_you::thank_you))
        .route("/admin", get(admin::dashboard))
        .route("/admin/export", get(admin::export))
}

/// Create the form submission router.
pub fn form_routes(rate_limit: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/rsvp", post(rsvp::submit))
        .route("/guestbook", post(guestbook::submit));

    if rate_limit {
        router.layer(submission_rate_limiter())
    } else {
        router
    }
}

/// Create the JSON API router, nested under `/api`.
pub fn api_routes(rate_limit: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/wedding", get(api::get_wedding).patch(api::update_wedding))
        .route("/rsvps", post(api::create_rsvp))
        .route("/guestbook", post(api::create_guestbook_entry))
        .route("/countdown", get(api::countdown));

    if rate_limit {
        router.layer(api_rate_limiter())
    } else {
        router
    }
}

/// Build all routes.
pub fn routes(rate_limit: bool) -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(form_routes(rate_limit))
        .nest("/api", api_routes(rate_limit))
}
