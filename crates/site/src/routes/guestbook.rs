//! Guestbook form submission.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::forms::GuestbookForm;
use crate::routes::home::{GuestbookFormView, HomeTemplate, RsvpFormView};
use crate::state::AppState;

/// Handle the guestbook form.
///
/// POST /guestbook
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<GuestbookForm>) -> Response {
    match form.validate() {
        Ok(input) => {
            let entry = state.store().add_guestbook_entry(input);
            let entry_id = entry.id.to_string();
            add_breadcrumb(
                "guestbook",
                "Guestbook message left",
                &[("entry_id", entry_id.as_str())],
            );
            Redirect::to("/#guestbook").into_response()
        }
        Err(errors) => {
            tracing::debug!(%errors, "Guestbook message rejected");
            let page = HomeTemplate::build(
                &state,
                RsvpFormView::default(),
                GuestbookFormView::new(form, errors),
            );
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
    }
}
