//! The wedding record and the entries guests add to it.
//!
//! All structs serialize with camelCase keys so the JSON API and the
//! export file read the same way (`guestCount`, `brideName`, ...).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Attendance, Email, GuestCount, GuestbookEntryId, RsvpId};

/// Format of the display-only `time` field.
pub const TIME_FORMAT: &str = "%H:%M";

/// The couple getting married.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Couple {
    pub bride_name: String,
    pub groom_name: String,
    pub tagline: String,
}

impl Couple {
    /// "Isabella & Alessandro"
    #[must_use]
    pub fn names(&self) -> String {
        format!("{} & {}", self.bride_name, self.groom_name)
    }
}

/// Map position of the venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where the ceremony takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

/// One milestone in the couple's story.
///
/// Timelines are displayed in the order supplied; nothing sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// A guest's RSVP as submitted, before the store assigns an id.
///
/// Values are expected to be validated by the form layer; the typed
/// fields only guarantee shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpInput {
    pub name: String,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub guest_count: GuestCount,
    pub attending: Attendance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A stored RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpEntry {
    pub id: RsvpId,
    #[serde(flatten)]
    pub rsvp: RsvpInput,
}

/// A guestbook message as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookInput {
    pub name: String,
    pub message: String,
}

/// A stored guestbook message.
///
/// `timestamp` is the time the store accepted the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub id: GuestbookEntryId,
    #[serde(flatten)]
    pub entry: GuestbookInput,
    pub timestamp: DateTime<Utc>,
}

/// Everything the site knows about the wedding.
///
/// `rsvps` and `guestbook` only ever grow. Unknown top-level fields
/// supplied through [`WeddingUpdate`] land in `extra` and serialize
/// alongside the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingRecord {
    pub couple: Couple,
    pub date: NaiveDate,
    pub time: String,
    pub venue: Venue,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub rsvps: Vec<RsvpEntry>,
    #[serde(default)]
    pub guestbook: Vec<GuestbookEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeddingRecord {
    /// The instant the countdown runs to: `date` at `time`, in UTC.
    ///
    /// Falls back to midnight when `time` is not `HH:MM`.
    #[must_use]
    pub fn ceremony_instant(&self) -> DateTime<Utc> {
        let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT)
            .unwrap_or(NaiveTime::MIN);
        self.date.and_time(time).and_utc()
    }

    /// Number of RSVPs answering yes.
    #[must_use]
    pub fn attending_count(&self) -> usize {
        self.rsvps
            .iter()
            .filter(|r| r.rsvp.attending.is_attending())
            .count()
    }

    /// Number of RSVPs answering no.
    #[must_use]
    pub fn declined_count(&self) -> usize {
        self.rsvps.len() - self.attending_count()
    }

    /// Head count across all yes RSVPs.
    #[must_use]
    pub fn attending_guests(&self) -> u32 {
        self.rsvps
            .iter()
            .filter(|r| r.rsvp.attending.is_attending())
            .map(|r| u32::from(r.rsvp.guest_count.get()))
            .sum()
    }
}

/// A shallow partial update of a [`WeddingRecord`].
///
/// Each `Some` field replaces the whole top-level field; nested objects
/// are not merged. Keys that match no known field are collected in
/// `extra` and stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeddingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couple: Option<Couple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineEvent>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeddingUpdate {
    /// Update that only replaces `time`.
    #[must_use]
    pub fn time(time: impl Into<String>) -> Self {
        Self {
            time: Some(time.into()),
            ..Self::default()
        }
    }

    /// Names of the top-level fields this update touches.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        let known = [
            ("couple", self.couple.is_some()),
            ("date", self.date.is_some()),
            ("time", self.time.is_some()),
            ("venue", self.venue.is_some()),
            ("gallery", self.gallery.is_some()),
            ("timeline", self.timeline.is_some()),
        ];
        known
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::seed::demo_record;

    #[test]
    fn test_ceremony_instant_combines_date_and_time() {
        let record = demo_record();
        assert_eq!(
            record.ceremony_instant(),
            Utc.with_ymd_and_hms(2024, 8, 15, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_ceremony_instant_falls_back_to_midnight() {
        let mut record = demo_record();
        record.time = "at sunset".to_string();
        assert_eq!(
            record.ceremony_instant(),
            Utc.with_ymd_and_hms(2024, 8, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_record_json_uses_camel_case() {
        let value = serde_json::to_value(demo_record()).unwrap();
        assert_eq!(value["couple"]["brideName"], "Isabella");
        assert_eq!(value["date"], "2024-08-15");
        assert_eq!(value["rsvps"], json!([]));
    }

    #[test]
    fn test_unknown_fields_round_trip_through_extra() {
        let mut value = serde_json::to_value(demo_record()).unwrap();
        value["dressCode"] = json!("Beach formal");
        let record: WeddingRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.extra.get("dressCode"), Some(&json!("Beach formal")));
    }

    #[test]
    fn test_rsvp_entry_flattens_input() {
        let entry = RsvpEntry {
            id: RsvpId::new(3),
            rsvp: RsvpInput {
                name: "Jane".to_string(),
                email: Email::parse("jane@x.com").unwrap(),
                phone: None,
                guest_count: GuestCount::new(2).unwrap(),
                attending: Attendance::Yes,
                message: None,
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Jane",
                "email": "jane@x.com",
                "guestCount": 2,
                "attending": "yes"
            })
        );
    }

    #[test]
    fn test_update_collects_unknown_keys() {
        let update: WeddingUpdate =
            serde_json::from_value(json!({"time": "18:00", "hashtag": "#TidesOfLove"})).unwrap();
        assert_eq!(update.time.as_deref(), Some("18:00"));
        assert_eq!(update.field_names(), vec!["time", "hashtag"]);
    }

    #[test]
    fn test_attending_summary() {
        let mut record = demo_record();
        for (i, (attending, guests)) in [(Attendance::Yes, 2), (Attendance::No, 1), (Attendance::Yes, 4)]
            .into_iter()
            .enumerate()
        {
            record.rsvps.push(RsvpEntry {
                id: RsvpId::new(i as u64 + 1),
                rsvp: RsvpInput {
                    name: format!("Guest {i}"),
                    email: Email::parse("guest@x.com").unwrap(),
                    phone: None,
                    guest_count: GuestCount::new(guests).unwrap(),
                    attending,
                    message: None,
                },
            });
        }
        assert_eq!(record.attending_count(), 2);
        assert_eq!(record.declined_count(), 1);
        assert_eq!(record.attending_guests(), 6);
    }
}
