//! Form parsing and field validation.
//!
//! The store trusts its callers, so every submission passes through here
//! first. HTML forms and the JSON API share the same rules and messages.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tides_core::{
    Attendance, Email, EmailError, GuestCount, GuestbookInput, RsvpInput,
};

/// Field name to message, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// RSVP
// =============================================================================

/// RSVP form fields as posted by the browser.
///
/// Every field defaults to empty so a missing radio button or select
/// becomes a field error instead of a rejected request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub attending: String,
    pub message: String,
}

/// RSVP body accepted by `POST /api/rsvps`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RsvpRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub guest_count: Option<u8>,
    pub attending: Option<String>,
    pub message: Option<String>,
}

impl From<RsvpRequest> for RsvpForm {
    fn from(req: RsvpRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone.unwrap_or_default(),
            guests: req.guest_count.map(|n| n.to_string()).unwrap_or_default(),
            attending: req.attending.unwrap_or_default(),
            message: req.message.unwrap_or_default(),
        }
    }
}

impl RsvpForm {
    /// Check required fields and build the store input.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<RsvpInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }

        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(EmailError::Empty) => {
                errors.add("email", "Email is required");
                None
            }
            Err(_) => {
                errors.add("email", "Invalid email address");
                None
            }
        };

        let guest_count = GuestCount::parse(&self.guests).ok();
        if guest_count.is_none() {
            errors.add("guests", "Please select number of guests");
        }

        let attending = self.attending.parse::<Attendance>().ok();
        if attending.is_none() {
            errors.add("attending", "Please select attendance");
        }

        match (email, guest_count, attending) {
            (Some(email), Some(guest_count), Some(attending)) if errors.is_empty() => {
                Ok(RsvpInput {
                    name: name.to_string(),
                    email,
                    phone: optional(&self.phone),
                    guest_count,
                    attending,
                    message: optional(&self.message),
                })
            }
            _ => Err(errors),
        }
    }
}

// =============================================================================
// Guestbook
// =============================================================================

/// Guestbook form fields, also the body of `POST /api/guestbook`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuestbookForm {
    pub name: String,
    pub message: String,
}

impl GuestbookForm {
    /// Check required fields and build the store input.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<GuestbookInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }
        let message = self.message.trim();
        if message.is_empty() {
            errors.add("message", "Message is required");
        }

        if errors.is_empty() {
            Ok(GuestbookInput {
                name: name.to_string(),
                message: message.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Blank optional fields are stored as `None`.
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
