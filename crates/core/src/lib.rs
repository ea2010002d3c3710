//! Tides of Love Core - wedding data and countdown.
//!
//! This crate holds everything the site needs that is not HTTP:
//! - `site` - Public wedding page, thank-you page and admin dashboard
//! - `cli` - Seed inspection and countdown tools
//!
//! # Architecture
//!
//! The core crate has no I/O beyond reading a seed file. The
//! [`WeddingStore`] owns the single in-memory [`WeddingRecord`]; nothing
//! is persisted and everything is lost when the process exits.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids and validated form values (email, guest count, attendance)
//! - [`wedding`] - The wedding record and its entries
//! - [`store`] - Lock-guarded store with append and partial-update operations
//! - [`countdown`] - Pure remaining-time decomposition
//! - [`clock`] - Time source injected into the store
//! - [`export`] - Downloadable snapshot of submissions
//! - [`seed`] - Demo dataset and seed file loading
//! - [`theme`] - Hero background by hour of day

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod countdown;
pub mod export;
pub mod seed;
pub mod store;
pub mod theme;
pub mod types;
pub mod wedding;

pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{Countdown, remaining};
pub use export::DataExport;
pub use seed::{SeedError, demo_record};
pub use store::WeddingStore;
pub use theme::HeroTheme;
pub use types::*;
pub use wedding::{
    Couple, Coordinates, GuestbookEntry, GuestbookInput, RsvpEntry, RsvpInput, TimelineEvent,
    Venue, WeddingRecord, WeddingUpdate,
};
