//! The single in-memory owner of the [`WeddingRecord`].
//!
//! The store is shared between request handlers, so the record sits behind
//! one `Mutex` and every operation holds it for its whole
//! read-modify-write. Appends therefore never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::countdown::{Countdown, remaining};
use crate::types::{GuestbookEntryId, IdSequence, RsvpId};
use crate::wedding::{
    GuestbookEntry, GuestbookInput, RsvpEntry, RsvpInput, WeddingRecord, WeddingUpdate,
};

/// Top-level fields that only change through the append operations.
const APPEND_ONLY_FIELDS: &[&str] = &["rsvps", "guestbook"];

/// Shared handle to the wedding record.
///
/// Cheaply cloneable via `Arc`; all clones see the same record.
#[derive(Clone)]
pub struct WeddingStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<StoreState>,
    clock: Box<dyn Clock>,
}

struct StoreState {
    record: WeddingRecord,
    rsvp_ids: IdSequence,
    guestbook_ids: IdSequence,
}

impl std::fmt::Debug for WeddingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("WeddingStore")
            .field("rsvps", &state.record.rsvps.len())
            .field("guestbook", &state.record.guestbook.len())
            .finish_non_exhaustive()
    }
}

impl WeddingStore {
    /// Create a store around `record` using the wall clock.
    #[must_use]
    pub fn new(record: WeddingRecord) -> Self {
        Self::with_clock(record, SystemClock)
    }

    /// Create a store with an explicit time source.
    ///
    /// Id allocation skips every id already present in `record`, so a seed
    /// file with entries keeps ids unique.
    #[must_use]
    pub fn with_clock(record: WeddingRecord, clock: impl Clock) -> Self {
        let rsvp_ids = IdSequence::after_existing(record.rsvps.iter().map(|r| r.id.as_u64()));
        let guestbook_ids =
            IdSequence::after_existing(record.guestbook.iter().map(|e| e.id.as_u64()));

        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(StoreState {
                    rsvp_ids,
                    guestbook_ids,
                    record,
                }),
                clock: Box::new(clock),
            }),
        }
    }

    // Every write completes before the guard drops, so a panic elsewhere
    // cannot leave a half-applied change behind.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Current instant according to the store's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.inner.clock.now()
    }

    /// Snapshot of the whole record.
    #[must_use]
    pub fn get(&self) -> WeddingRecord {
        self.lock().record.clone()
    }

    /// Read the record without cloning it.
    ///
    /// The lock is held while `f` runs; do not call back into the store.
    pub fn read<R>(&self, f: impl FnOnce(&WeddingRecord) -> R) -> R {
        f(&self.lock().record)
    }

    /// Append an RSVP and return it with its new id.
    pub fn add_rsvp(&self, input: RsvpInput) -> RsvpEntry {
        let mut state = self.lock();
        let id = RsvpId::new(state.rsvp_ids.next_id());
        let entry = RsvpEntry { id, rsvp: input };
        state.record.rsvps.push(entry.clone());
        let total = state.record.rsvps.len();
        drop(state);

        tracing::info!(
            rsvp_id = %id,
            attending = %entry.rsvp.attending,
            guests = %entry.rsvp.guest_count,
            total,
            "RSVP added"
        );
        entry
    }

    /// Append a guestbook message stamped with the current instant.
    ///
    /// Timestamps never go backwards: if the clock reads earlier than the
    /// previous entry, the previous entry's timestamp is reused.
    pub fn add_guestbook_entry(&self, input: GuestbookInput) -> GuestbookEntry {
        let now = self.now();
        let mut state = self.lock();
        let timestamp = state
            .record
            .guestbook
            .last()
            .map_or(now, |last| last.timestamp.max(now));
        let id = GuestbookEntryId::new(state.guestbook_ids.next_id());
        let entry = GuestbookEntry {
            id,
            entry: input,
            timestamp,
        };
        state.record.guestbook.push(entry.clone());
        let total = state.record.guestbook.len();
        drop(state);

        tracing::info!(entry_id = %id, %timestamp, total, "Guestbook entry added");
        entry
    }

    /// Shallow-merge `partial` into the record and return the result.
    ///
    /// Unknown keys are stored in [`WeddingRecord::extra`]. Keys naming the
    /// append-only collections are ignored.
    pub fn update(&self, partial: WeddingUpdate) -> WeddingRecord {
        let fields: Vec<String> = partial
            .field_names()
            .into_iter()
            .map(String::from)
            .collect();

        let WeddingUpdate {
            couple,
            date,
            time,
            venue,
            gallery,
            timeline,
            extra,
        } = partial;

        let mut state = self.lock();
        let record = &mut state.record;
        if let Some(couple) = couple {
            record.couple = couple;
        }
        if let Some(date) = date {
            record.date = date;
        }
        if let Some(time) = time {
            record.time = time;
        }
        if let Some(venue) = venue {
            record.venue = venue;
        }
        if let Some(gallery) = gallery {
            record.gallery = gallery;
        }
        if let Some(timeline) = timeline {
            record.timeline = timeline;
        }
        for (key, value) in extra {
            if APPEND_ONLY_FIELDS.contains(&key.as_str()) {
                tracing::warn!(field = %key, "Ignoring update to append-only field");
                continue;
            }
            record.extra.insert(key, value);
        }
        let updated = record.clone();
        drop(state);

        tracing::debug!(fields = ?fields, "Wedding record updated");
        updated
    }

    /// Time left until the ceremony, measured by the store's clock.
    #[must_use]
    pub fn countdown(&self) -> Countdown {
        let target = self.read(WeddingRecord::ceremony_instant);
        remaining(self.now(), target)
    }
}
