//! Party size on an RSVP.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`GuestCount`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCountError {
    /// The count is outside the accepted range.
    #[error("guest count must be between {min} and {max} (got {got})")]
    OutOfRange {
        /// Smallest accepted count.
        min: u8,
        /// Largest accepted count.
        max: u8,
        /// The rejected value.
        got: u8,
    },
    /// The input is not a number.
    #[error("guest count must be a number")]
    NotANumber,
}

/// Number of people covered by one RSVP, including the respondent.
///
/// ```
/// use tides_core::GuestCount;
///
/// assert_eq!(GuestCount::new(2).map(GuestCount::get), Ok(2));
/// assert!(GuestCount::new(0).is_err());
/// assert!(GuestCount::new(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuestCount(u8);

impl GuestCount {
    /// Smallest party size ("Just me").
    pub const MIN: u8 = 1;
    /// Largest party size.
    pub const MAX: u8 = 4;

    /// Create a guest count.
    ///
    /// # Errors
    ///
    /// Returns [`GuestCountError::OutOfRange`] unless `1 <= count <= 4`.
    pub const fn new(count: u8) -> Result<Self, GuestCountError> {
        if count < Self::MIN || count > Self::MAX {
            return Err(GuestCountError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                got: count,
            });
        }
        Ok(Self(count))
    }

    /// Parse a guest count from a form value such as `"2"`.
    ///
    /// # Errors
    ///
    /// Returns [`GuestCountError::NotANumber`] for non-numeric input and
    /// [`GuestCountError::OutOfRange`] for numbers outside 1-4.
    pub fn parse(s: &str) -> Result<Self, GuestCountError> {
        let count = s
            .trim()
            .parse::<u8>()
            .map_err(|_| GuestCountError::NotANumber)?;
        Self::new(count)
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = GuestCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuestCount> for u8 {
    fn from(count: GuestCount) -> Self {
        count.0
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
