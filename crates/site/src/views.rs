//! Display models shared by the page templates.
//!
//! Templates only print strings; all date formatting happens here.

use chrono::{DateTime, NaiveDate, Utc};
use tides_core::{Countdown, GuestbookEntry, RsvpEntry, TimelineEvent, WeddingRecord};

/// "Thursday, August 15, 2024"
pub const LONG_DATE: &str = "%A, %B %-d, %Y";
/// "July 14, 2020"
pub const STORY_DATE: &str = "%B %-d, %Y";
/// "Aug 15, 2024"
pub const SHORT_DATE: &str = "%b %-d, %Y";

#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE).to_string()
}

/// Wedding facts every page header and footer needs.
#[derive(Debug, Clone)]
pub struct WeddingView {
    pub bride_name: String,
    pub groom_name: String,
    pub couple_names: String,
    pub tagline: String,
    /// ISO date for `<time datetime>` and `<input type=date>`.
    pub date_iso: String,
    pub date_long: String,
    pub time: String,
    pub venue_name: String,
    pub venue_address: String,
    pub lat: String,
    pub lng: String,
    /// RFC 3339 ceremony instant for the countdown script.
    pub ceremony_at: String,
}

impl From<&WeddingRecord> for WeddingView {
    fn from(record: &WeddingRecord) -> Self {
        Self {
            bride_name: record.couple.bride_name.clone(),
            groom_name: record.couple.groom_name.clone(),
            couple_names: record.couple.names(),
            tagline: record.couple.tagline.clone(),
            date_iso: record.date.to_string(),
            date_long: long_date(record.date),
            time: record.time.clone(),
            venue_name: record.venue.name.clone(),
            venue_address: record.venue.address.clone(),
            lat: format!("{:.4}", record.venue.coordinates.lat),
            lng: format!("{:.4}", record.venue.coordinates.lng),
            ceremony_at: record.ceremony_instant().to_rfc3339(),
        }
    }
}

/// A story milestone.
#[derive(Debug, Clone)]
pub struct TimelineView {
    pub date: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Alternating layout, starting on the left.
    pub flipped: bool,
}

impl TimelineView {
    #[must_use]
    pub fn list(events: &[TimelineEvent]) -> Vec<Self> {
        events
            .iter()
            .enumerate()
            .map(|(i, event)| Self {
                date: event.date.format(STORY_DATE).to_string(),
                title: event.title.clone(),
                description: event.description.clone(),
                image: event.image.clone(),
                flipped: i % 2 == 1,
            })
            .collect()
    }
}

/// One countdown tile.
#[derive(Debug, Clone)]
pub struct CountdownUnit {
    pub label: &'static str,
    /// Field name in the `/api/countdown` response.
    pub key: &'static str,
    pub value: i64,
}

impl CountdownUnit {
    #[must_use]
    pub fn tiles(countdown: Countdown) -> Vec<Self> {
        vec![
            Self {
                label: "Days",
                key: "days",
                value: countdown.days,
            },
            Self {
                label: "Hours",
                key: "hours",
                value: i64::from(countdown.hours),
            },
            Self {
                label: "Minutes",
                key: "minutes",
                value: i64::from(countdown.minutes),
            },
            Self {
                label: "Seconds",
                key: "seconds",
                value: i64::from(countdown.seconds),
            },
        ]
    }
}

/// A guestbook message.
#[derive(Debug, Clone)]
pub struct GuestbookView {
    pub name: String,
    pub message: String,
    pub date: String,
    pub timestamp: String,
}

impl From<&GuestbookEntry> for GuestbookView {
    fn from(entry: &GuestbookEntry) -> Self {
        Self {
            name: entry.entry.name.clone(),
            message: entry.entry.message.clone(),
            date: short_timestamp(entry.timestamp),
            timestamp: entry.timestamp.to_rfc3339(),
        }
    }
}

/// An RSVP card on the admin dashboard.
#[derive(Debug, Clone)]
pub struct RsvpView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub guests: String,
    pub attending: bool,
    pub attending_label: &'static str,
    pub message: Option<String>,
}

impl From<&RsvpEntry> for RsvpView {
    fn from(entry: &RsvpEntry) -> Self {
        let rsvp = &entry.rsvp;
        Self {
            id: entry.id.to_string(),
            name: rsvp.name.clone(),
            email: rsvp.email.to_string(),
            phone: rsvp.phone.clone(),
            guests: rsvp.guest_count.to_string(),
            attending: rsvp.attending.is_attending(),
            attending_label: rsvp.attending.label(),
            message: rsvp.message.clone(),
        }
    }
}

fn short_timestamp(at: DateTime<Utc>) -> String {
    at.format(SHORT_DATE).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use tides_core::{GuestbookEntryId, GuestbookInput, demo_record};

    use super::*;

    #[test]
    fn test_wedding_view_formats_dates() {
        let view = WeddingView::from(&demo_record());
        assert_eq!(view.date_long, "Thursday, August 15, 2024");
        assert_eq!(view.couple_names, "Isabella & Alessandro");
        assert_eq!(view.ceremony_at, "2024-08-15T17:00:00+00:00");
        assert_eq!(view.lat, "36.3932");
    }

    #[test]
    fn test_timeline_alternates_and_keeps_order() {
        let views = TimelineView::list(&demo_record().timeline);
        let titles: Vec<_> = views.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["First Met", "The Proposal", "Our Wedding Day"]);
        assert_eq!(views[0].date, "July 14, 2020");
        assert!(!views[0].flipped);
        assert!(views[1].flipped);
    }

    #[test]
    fn test_countdown_tiles() {
        let tiles = CountdownUnit::tiles(Countdown::from_seconds(90_061));
        let values: Vec<_> = tiles.iter().map(|t| t.value).collect();
        assert_eq!(values, [1, 1, 1, 1]);
        assert_eq!(tiles[3].label, "Seconds");
    }

    #[test]
    fn test_guestbook_view_date() {
        let entry = GuestbookEntry {
            id: GuestbookEntryId::new(1),
            entry: GuestbookInput {
                name: "Maria".to_string(),
                message: "Congratulations!".to_string(),
            },
            timestamp: Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap(),
        };
        assert_eq!(GuestbookView::from(&entry).date, "Aug 1, 2024");
    }
}
