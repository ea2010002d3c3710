//! RSVP form submission.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::forms::RsvpForm;
use crate::routes::home::{GuestbookFormView, HomeTemplate, RsvpFormView};
use crate::state::AppState;

/// Handle the RSVP form.
///
/// POST /rsvp
///
/// A valid reply is appended and the guest is sent to the thank-you page.
/// Otherwise the home page comes back with the submitted values and a
/// message under each failing field.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<RsvpForm>) -> Response {
    match form.validate() {
        Ok(input) => {
            let entry = state.store().add_rsvp(input);
            let rsvp_id = entry.id.to_string();
            add_breadcrumb(
                "rsvp",
                "RSVP submitted",
                &[
                    ("rsvp_id", rsvp_id.as_str()),
                    ("attending", entry.rsvp.attending.as_str()),
                ],
            );
            Redirect::to("/thank-you").into_response()
        }
        Err(errors) => {
            tracing::debug!(%errors, "RSVP rejected");
            let page = HomeTemplate::build(
                &state,
                RsvpFormView::new(form, errors),
                GuestbookFormView::default(),
            );
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}
