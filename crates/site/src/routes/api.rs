//! JSON API over the wedding store.
//!
//! Request bodies that fail to parse are answered with 400; bodies that
//! parse but fail field validation get 422 and `{"errors": {...}}`.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::forms::{GuestbookForm, RsvpForm, RsvpRequest};
use crate::state::AppState;
use tides_core::{Countdown, WeddingRecord, WeddingUpdate};

/// GET /api/wedding
pub async fn get_wedding(State(state): State<AppState>) -> Json<WeddingRecord> {
    Json(state.store().get())
}

/// Shallow-merge the given top-level fields into the record.
///
/// PATCH /api/wedding
#[instrument(skip(state, payload))]
pub async fn update_wedding(
    State(state): State<AppState>,
    payload: std::result::Result<Json<WeddingUpdate>, JsonRejection>,
) -> Result<Json<WeddingRecord>> {
    let Json(update) = payload?;
    let fields = update.field_names().join(",");
    let record = state.store().update(update);
    add_breadcrumb("wedding", "Wedding updated", &[("fields", fields.as_str())]);
    Ok(Json(record))
}

/// POST /api/rsvps
#[instrument(skip(state, payload))]
pub async fn create_rsvp(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload?;
    let input = RsvpForm::from(request)
        .validate()
        .map_err(AppError::Validation)?;
    let entry = state.store().add_rsvp(input);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/guestbook
#[instrument(skip(state, payload))]
pub async fn create_guestbook_entry(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GuestbookForm>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(form) = payload?;
    let input = form.validate().map_err(AppError::Validation)?;
    let entry = state.store().add_guestbook_entry(input);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Remaining time plus the instant being counted down to.
#[derive(Debug, Serialize)]
pub struct CountdownResponse {
    #[serde(flatten)]
    pub remaining: Countdown,
    pub target: DateTime<Utc>,
}

/// GET /api/countdown
///
/// Polled once a second by the home page script.
pub async fn countdown(State(state): State<AppState>) -> Json<CountdownResponse> {
    let store = state.store();
    Json(CountdownResponse {
        remaining: store.countdown(),
        target: store.read(WeddingRecord::ceremony_instant),
    })
}
