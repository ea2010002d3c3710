//! Admin dashboard and data export.
//!
//! There is no login: the dashboard is meant to be reached by the couple
//! on a private link.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{GuestbookView, RsvpView, WeddingView};
use tides_core::DataExport;

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Rsvps,
    Guestbook,
    Settings,
}

impl AdminTab {
    /// Unknown or missing values fall back to the RSVP tab.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("guestbook") => Self::Guestbook,
            Some("settings") => Self::Settings,
            _ => Self::Rsvps,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsvps => "rsvps",
            Self::Guestbook => "guestbook",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub tab: Option<String>,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub wedding: WeddingView,
    pub tab: &'static str,
    pub rsvps: Vec<RsvpView>,
    pub guestbook: Vec<GuestbookView>,
    pub attending_count: usize,
    pub declined_count: usize,
    pub attending_guests: u32,
}

/// GET /admin?tab=rsvps|guestbook|settings
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> impl IntoResponse {
    let tab = AdminTab::parse(query.tab.as_deref());

    state.store().read(|record| AdminTemplate {
        wedding: WeddingView::from(record),
        tab: tab.as_str(),
        rsvps: record.rsvps.iter().map(RsvpView::from).collect(),
        guestbook: record.guestbook.iter().map(GuestbookView::from).collect(),
        attending_count: record.attending_count(),
        declined_count: record.declined_count(),
        attending_guests: record.attending_guests(),
    })
}

/// Download every RSVP and guestbook entry as pretty-printed JSON.
///
/// GET /admin/export
#[instrument(skip(state))]
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let store = state.store();
    let now = store.now();
    let export = store.read(|record| DataExport::from_record(record, now));
    let body = export.to_json_pretty()?;

    tracing::info!(
        rsvps = export.rsvps.len(),
        guestbook = export.guestbook.len(),
        "Data exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name()),
            ),
        ],
        body,
    ))
}
