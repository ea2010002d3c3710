//! Thank-you page shown after an RSVP.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::filters;
use crate::state::AppState;
use crate::views::WeddingView;

#[derive(Template, WebTemplate)]
#[template(path = "thank_you.html")]
pub struct ThankYouTemplate {
    pub wedding: WeddingView,
}

/// GET /thank-you
pub async fn thank_you(State(state): State<AppState>) -> impl IntoResponse {
    ThankYouTemplate {
        wedding: state.store().read(|record| WeddingView::from(record)),
    }
}
