//! Demo dataset and seed file loading.
//!
//! The site starts from [`demo_record`] unless a JSON seed file is
//! configured. Seeds are read once at startup; nothing is written back.

use std::path::Path;

use chrono::NaiveDate;

use crate::wedding::{Coordinates, Couple, TimelineEvent, Venue, WeddingRecord};

/// Errors loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid seed: {0}")]
    Invalid(String),
}

const GALLERY: &[&str] = &[
    "https://images.unsplash.com/photo-1519741497674-611481863552?w=800",
    "https://images.unsplash.com/photo-1469371670807-013ccf25f16a?w=800",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
    "https://images.unsplash.com/photo-1439066615861-d1af74d74000?w=800",
    "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800",
];

/// The "Tides of Love" demo wedding in Santorini.
#[must_use]
pub fn demo_record() -> WeddingRecord {
    WeddingRecord {
        couple: Couple {
            bride_name: "Isabella".to_string(),
            groom_name: "Alessandro".to_string(),
            tagline: "Two hearts, one ocean, endless love".to_string(),
        },
        date: ymd(2024, 8, 15),
        time: "17:00".to_string(),
        venue: Venue {
            name: "Sunset Cliffs Resort".to_string(),
            address: "Santorini, Greece".to_string(),
            coordinates: Coordinates {
                lat: 36.3932,
                lng: 25.4615,
            },
        },
        gallery: GALLERY.iter().map(|url| (*url).to_string()).collect(),
        timeline: vec![
            TimelineEvent {
                date: ymd(2020, 7, 14),
                title: "First Met".to_string(),
                description: "Under the stars at a beachside café in Mykonos".to_string(),
                image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400"
                    .to_string(),
            },
            TimelineEvent {
                date: ymd(2022, 12, 24),
                title: "The Proposal".to_string(),
                description: "Christmas Eve magic on the cliffs of Santorini".to_string(),
                image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=400"
                    .to_string(),
            },
            TimelineEvent {
                date: ymd(2024, 8, 15),
                title: "Our Wedding Day".to_string(),
                description: "Saying \"I do\" with our toes in the sand".to_string(),
                image: "https://images.unsplash.com/photo-1469371670807-013ccf25f16a?w=400"
                    .to_string(),
            },
        ],
        rsvps: Vec::new(),
        guestbook: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

// Only called with literal calendar dates above.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Parse a seed record from JSON text.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] for malformed JSON and
/// [`SeedError::Invalid`] when the record breaks an invariant.
pub fn parse_record(json: &str, origin: &str) -> Result<WeddingRecord, SeedError> {
    let record: WeddingRecord = serde_json::from_str(json).map_err(|source| SeedError::Parse {
        path: origin.to_string(),
        source,
    })?;
    validate(&record)?;
    Ok(record)
}

/// Load a seed record from a JSON file.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_record`].
pub fn load_record(path: &Path) -> Result<WeddingRecord, SeedError> {
    let origin = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: origin.clone(),
        source,
    })?;
    let record = parse_record(&json, &origin)?;
    tracing::info!(
        path = %origin,
        rsvps = record.rsvps.len(),
        guestbook = record.guestbook.len(),
        "Loaded wedding seed"
    );
    Ok(record)
}

/// Check the invariants a seed must already satisfy: unique ids per
/// collection and non-decreasing guestbook timestamps.
fn validate(record: &WeddingRecord) -> Result<(), SeedError> {
    let mut rsvp_ids: Vec<_> = record.rsvps.iter().map(|r| r.id).collect();
    rsvp_ids.sort_unstable();
    if rsvp_ids.windows(2).any(|w| w.first() == w.last()) {
        return Err(SeedError::Invalid("duplicate RSVP id".to_string()));
    }

    let mut entry_ids: Vec<_> = record.guestbook.iter().map(|e| e.id).collect();
    entry_ids.sort_unstable();
    if entry_ids.windows(2).any(|w| w.first() == w.last()) {
        return Err(SeedError::Invalid("duplicate guestbook id".to_string()));
    }

    if record
        .guestbook
        .windows(2)
        .any(|w| matches!(w, [a, b] if b.timestamp < a.timestamp))
    {
        return Err(SeedError::Invalid(
            "guestbook timestamps must be in insertion order".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_demo_record_matches_template() {
        let record = demo_record();
        assert_eq!(record.couple.names(), "Isabella & Alessandro");
        assert_eq!(record.date.to_string(), "2024-08-15");
        assert_eq!(record.gallery.len(), 6);
        let titles: Vec<_> = record.timeline.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["First Met", "The Proposal", "Our Wedding Day"]);
        assert!(record.rsvps.is_empty());
        assert!(record.guestbook.is_empty());
    }

    #[test]
    fn test_parse_round_trips_demo() {
        let json = serde_json::to_string(&demo_record()).unwrap();
        assert_eq!(parse_record(&json, "demo").unwrap(), demo_record());
    }

    #[test]
    fn test_parse_reports_origin() {
        let err = parse_record("{", "seed.json").unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
        assert!(err.to_string().contains("seed.json"));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let mut value = serde_json::to_value(demo_record()).unwrap();
        let entry = json!({"id": 1, "name": "Maria", "message": "Hi", "timestamp": "2024-08-01T10:00:00Z"});
        value["guestbook"] = json!([entry.clone(), entry]);
        let err = parse_record(&value.to_string(), "seed.json").unwrap_err();
        assert!(matches!(err, SeedError::Invalid(_)));
    }

    #[test]
    fn test_parse_rejects_out_of_order_timestamps() {
        let mut value = serde_json::to_value(demo_record()).unwrap();
        value["guestbook"] = json!([
            {"id": 1, "name": "Maria", "message": "Hi", "timestamp": "2024-08-02T10:00:00Z"},
            {"id": 2, "name": "Nikos", "message": "Opa", "timestamp": "2024-08-01T10:00:00Z"}
        ]);
        assert!(parse_record(&value.to_string(), "seed.json").is_err());
    }

    #[test]
    fn test_load_record_from_file() {
        let path = std::env::temp_dir().join(format!("tides-seed-{}.json", std::process::id()));
        let mut value = serde_json::to_value(demo_record()).unwrap();
        value["guestbook"] = json!([
            {"id": 3, "name": "Maria", "message": "Hi", "timestamp": "2024-08-01T10:00:00Z"}
        ]);
        std::fs::write(&path, value.to_string()).unwrap();

        let record = load_record(&path);
        std::fs::remove_file(&path).unwrap();

        let record = record.unwrap();
        assert_eq!(record.couple.names(), "Isabella & Alessandro");
        assert_eq!(record.guestbook.len(), 1);
        assert_eq!(record.guestbook[0].id.as_u64(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_record(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
