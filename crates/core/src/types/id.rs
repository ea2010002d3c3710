//! Newtype IDs for type-safe entry references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing RSVP ids with guestbook ids.

use std::collections::BTreeSet;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_u64()`
/// - `From<u64>` and `Into<u64>` implementations
///
/// # Example
///
/// ```rust
/// # use tides_core::define_id;
/// define_id!(RsvpId);
/// define_id!(GuestbookEntryId);
///
/// let rsvp_id = RsvpId::new(1);
/// let entry_id = GuestbookEntryId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: RsvpId = entry_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a u64 value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying u64 value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(RsvpId);
define_id!(GuestbookEntryId);

/// Id allocator, one per collection.
///
/// Counts up from the largest id it has seen. If that would pass
/// `u64::MAX` it wraps to the lowest value not yet taken, so an id is
/// never handed out twice for the lifetime of the allocator.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
    taken: BTreeSet<u64>,
}

impl IdSequence {
    /// Create an allocator that skips every id in `existing` and continues
    /// after the largest of them.
    #[must_use]
    pub fn after_existing(existing: impl IntoIterator<Item = u64>) -> Self {
        let taken: BTreeSet<u64> = existing.into_iter().collect();
        Self {
            last: taken.last().copied().unwrap_or(0),
            taken,
        }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> u64 {
        let mut candidate = self.last.checked_add(1).unwrap_or(1);
        while self.taken.contains(&candidate) {
            candidate = candidate.checked_add(1).unwrap_or(1);
        }
        self.taken.insert(candidate);
        self.last = candidate;
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
    }

    #[test]
    fn test_sequence_continues_after_seed() {
        let mut seq = IdSequence::after_existing([3, 41, 7]);
        assert_eq!(seq.next_id(), 42);
    }

    #[test]
    fn test_sequence_wraps_to_lowest_free_id() {
        let mut seq = IdSequence::after_existing([1, 2, u64::MAX]);
        assert_eq!(seq.next_id(), 3);
        assert_eq!(seq.next_id(), 4);
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = RsvpId::new(7);
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("7"));
        assert_eq!(id.to_string(), "7");
        assert_eq!(u64::from(id), 7);
    }
}
