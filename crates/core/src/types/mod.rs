//! Core types for the wedding site.
//!
//! This module provides type-safe wrappers for the values guests submit.

pub mod attendance;
pub mod email;
pub mod guest_count;
pub mod id;

pub use attendance::{Attendance, AttendanceError};
pub use email::{Email, EmailError};
pub use guest_count::{GuestCount, GuestCountError};
pub use id::*;
