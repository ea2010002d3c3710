//! Downloadable snapshot of guest submissions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::wedding::{GuestbookEntry, RsvpEntry, WeddingRecord};

/// `{rsvps, guestbook, exportDate}` as offered by the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    pub rsvps: Vec<RsvpEntry>,
    pub guestbook: Vec<GuestbookEntry>,
    pub export_date: DateTime<Utc>,
}

impl DataExport {
    /// Snapshot the submissions in `record` as of `export_date`.
    #[must_use]
    pub fn from_record(record: &WeddingRecord, export_date: DateTime<Utc>) -> Self {
        Self {
            rsvps: record.rsvps.clone(),
            guestbook: record.guestbook.clone(),
            export_date,
        }
    }

    /// `wedding-data-YYYY-MM-DD.json`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("wedding-data-{}.json", self.export_date.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization fails, which the derived
    /// impls do not do for these types.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::seed::demo_record;
    use crate::store::WeddingStore;
    use crate::wedding::GuestbookInput;

    #[test]
    fn test_export_contains_only_submissions() {
        let store = WeddingStore::new(demo_record());
        store.add_guestbook_entry(GuestbookInput {
            name: "Maria".to_string(),
            message: "Congratulations!".to_string(),
        });
        let at = Utc.with_ymd_and_hms(2024, 8, 20, 9, 30, 0).unwrap();

        let export = DataExport::from_record(&store.get(), at);
        let value = serde_json::to_value(&export).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["exportDate"], "2024-08-20T09:30:00Z");
        assert_eq!(value["guestbook"][0]["name"], "Maria");
        assert_eq!(value["rsvps"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_file_name_uses_export_day() {
        let at = Utc.with_ymd_and_hms(2024, 8, 20, 23, 59, 0).unwrap();
        let export = DataExport::from_record(&demo_record(), at);
        assert_eq!(export.file_name(), "wedding-data-2024-08-20.json");
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let at = Utc.with_ymd_and_hms(2024, 8, 20, 9, 30, 0).unwrap();
        let body = DataExport::from_record(&demo_record(), at)
            .to_json_pretty()
            .unwrap();
        assert!(body.contains("\n  \"exportDate\""));
    }
}
