//! RSVP attendance answer.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error parsing an [`Attendance`] from a form value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("attendance must be \"yes\" or \"no\" (got {0:?})")]
pub struct AttendanceError(pub String);

/// Whether the guest will attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// "Yes, I'll be there!"
    Yes,
    /// "Sorry, can't make it"
    No,
}

impl Attendance {
    /// Form and JSON value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Badge label shown on the admin dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Attending",
            Self::No => "Not Attending",
        }
    }

    #[must_use]
    pub const fn is_attending(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl FromStr for Attendance {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(AttendanceError(s.to_string())),
        }
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
