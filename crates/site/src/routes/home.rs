//! Home page: hero, story, details, travel, RSVP and guestbook.
//!
//! The RSVP and guestbook handlers re-render this page with field errors
//! when a submission fails validation, so the template takes the state of
//! both forms.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::Timelike;
use tracing::instrument;

use crate::content::{self, ARRIVAL_NOTE, CEREMONY_NOTE, TravelCard};
use crate::filters;
use crate::forms::{FieldErrors, GuestbookForm, RsvpForm};
use crate::state::AppState;
use crate::views::{CountdownUnit, GuestbookView, TimelineView, WeddingView};
use tides_core::HeroTheme;

/// A choice in the guest count select.
#[derive(Debug, Clone)]
pub struct GuestOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// RSVP form values and errors as last submitted.
#[derive(Debug, Clone, Default)]
pub struct RsvpFormView {
    pub values: RsvpForm,
    pub errors: FieldErrors,
}

impl RsvpFormView {
    #[must_use]
    pub fn new(values: RsvpForm, errors: FieldErrors) -> Self {
        Self { values, errors }
    }

    #[must_use]
    pub fn guest_options(&self) -> Vec<GuestOption> {
        content::GUEST_OPTIONS
            .iter()
            .map(|&(value, label)| GuestOption {
                value,
                label,
                selected: self.values.guests.trim() == value,
            })
            .collect()
    }

    #[must_use]
    pub fn attending_is(&self, choice: &str) -> bool {
        self.values.attending.trim().eq_ignore_ascii_case(choice)
    }

    /// Error message for `field`, empty when it passed.
    #[must_use]
    pub fn error(&self, field: &str) -> &'static str {
        self.errors.get(field).unwrap_or_default()
    }
}

/// Guestbook form values and errors as last submitted.
#[derive(Debug, Clone, Default)]
pub struct GuestbookFormView {
    pub values: GuestbookForm,
    pub errors: FieldErrors,
}

impl GuestbookFormView {
    #[must_use]
    pub fn new(values: GuestbookForm, errors: FieldErrors) -> Self {
        Self { values, errors }
    }

    #[must_use]
    pub fn error(&self, field: &str) -> &'static str {
        self.errors.get(field).unwrap_or_default()
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub wedding: WeddingView,
    /// Hero background modifier class.
    pub theme_class: &'static str,
    pub countdown: Vec<CountdownUnit>,
    /// True once the ceremony has started.
    pub countdown_done: bool,
    pub timeline: Vec<TimelineView>,
    pub gallery: Vec<String>,
    pub travel: &'static [TravelCard],
    pub ceremony_note: &'static str,
    pub arrival_note: &'static str,
    pub rsvp: RsvpFormView,
    pub guestbook_form: GuestbookFormView,
    pub guestbook: Vec<GuestbookView>,
}

impl HomeTemplate {
    /// Build the page from the current record and the given form state.
    #[must_use]
    pub fn build(state: &AppState, rsvp: RsvpFormView, guestbook_form: GuestbookFormView) -> Self {
        let store = state.store();
        let now = store.now();
        let countdown = store.countdown();

        store.read(|record| Self {
            wedding: WeddingView::from(record),
            theme_class: HeroTheme::for_hour(now.hour()).css_class(),
            countdown: CountdownUnit::tiles(countdown),
            countdown_done: countdown.is_zero(),
            timeline: TimelineView::list(&record.timeline),
            gallery: record.gallery.clone(),
            travel: content::TRAVEL,
            ceremony_note: CEREMONY_NOTE,
            arrival_note: ARRIVAL_NOTE,
            rsvp,
            guestbook_form,
            guestbook: record.guestbook.iter().map(GuestbookView::from).collect(),
        })
    }
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate::build(&state, RsvpFormView::default(), GuestbookFormView::default())
}
