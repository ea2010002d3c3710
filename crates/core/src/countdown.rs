//! Remaining time until the ceremony.
//!
//! [`remaining`] is pure: the page script asks for a fresh value once a
//! second and nothing here keeps timer state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// A duration split into whole days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl Countdown {
    /// Target reached or passed.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a non-negative number of whole seconds.
    ///
    /// Negative input yields [`Countdown::ZERO`].
    #[must_use]
    pub fn from_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::ZERO;
        }
        Self {
            days: total / SECONDS_PER_DAY,
            hours: unit((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR),
            minutes: unit((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE),
            seconds: unit(total % SECONDS_PER_MINUTE),
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Inverse of [`Countdown::from_seconds`].
    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + i64::from(self.hours) * SECONDS_PER_HOUR
            + i64::from(self.minutes) * SECONDS_PER_MINUTE
            + i64::from(self.seconds)
    }
}

// Values are already reduced below 60 (or 24) by the caller.
fn unit(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

/// Time left from `now` until `target`, floored to whole seconds.
///
/// Returns [`Countdown::ZERO`] once `target <= now`; never negative.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tides_core::{Countdown, remaining};
///
/// let target = Utc.with_ymd_and_hms(2024, 8, 15, 17, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2024, 8, 14, 17, 0, 0).unwrap();
/// assert_eq!(remaining(now, target).days, 1);
/// assert_eq!(remaining(target, now), Countdown::ZERO);
/// ```
#[must_use]
pub fn remaining(now: DateTime<Utc>, target: DateTime<Utc>) -> Countdown {
    if target <= now {
        return Countdown::ZERO;
    }
    // Whole seconds; sub-second remainders are dropped.
    let millis = (target - now).num_milliseconds();
    Countdown::from_seconds(millis.div_euclid(1000))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn ceremony() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 15, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_one_day_before() {
        let now = Utc.with_ymd_and_hms(2024, 8, 14, 17, 0, 0).unwrap();
        assert_eq!(
            remaining(now, ceremony()),
            Countdown {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_after_target_is_zero() {
        let now = Utc.with_ymd_and_hms(2024, 8, 15, 17, 0, 1).unwrap();
        assert_eq!(remaining(now, ceremony()), Countdown::ZERO);
        assert!(remaining(now, ceremony()).is_zero());
    }

    #[test]
    fn test_exactly_at_target_is_zero() {
        assert_eq!(remaining(ceremony(), ceremony()), Countdown::ZERO);
    }

    #[test]
    fn test_mixed_units() {
        let now = ceremony()
            - Duration::days(3)
            - Duration::hours(4)
            - Duration::minutes(5)
            - Duration::seconds(6);
        assert_eq!(
            remaining(now, ceremony()),
            Countdown {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
    }

    #[test]
    fn test_sub_second_remainder_is_floored() {
        let now = ceremony() - Duration::milliseconds(1999);
        assert_eq!(remaining(now, ceremony()).seconds, 1);

        let now = ceremony() - Duration::milliseconds(999);
        assert_eq!(remaining(now, ceremony()), Countdown::ZERO);
    }

    #[test]
    fn test_total_seconds_reconstructs_difference() {
        let target = ceremony();
        for offset_ms in [1_000_i64, 59_999, 3_600_000, 86_399_999, 123_456_789, 9_876_543_210] {
            let now = target - Duration::milliseconds(offset_ms);
            let countdown = remaining(now, target);
            assert_eq!(countdown.total_seconds(), offset_ms / 1000);
            assert!(countdown.hours <= 23);
            assert!(countdown.minutes <= 59);
            assert!(countdown.seconds <= 59);
        }
    }

    #[test]
    fn test_from_seconds_negative_is_zero() {
        assert_eq!(Countdown::from_seconds(-5), Countdown::ZERO);
    }
}
