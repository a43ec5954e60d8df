//! Planning time model.
//!
//! All planner arithmetic happens on whole seconds.  `Timestamp` is an
//! absolute instant: seconds since the Unix epoch or since service-day
//! midnight, as long as the caller is consistent.  Durations are plain `u32`/`i64` second counts.

use std::fmt;

/// An absolute instant in whole seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// "Never reached": later than any real instant.
    pub const NEVER: Timestamp = Timestamp(i64::MAX);

    /// Return the instant `secs` seconds after `self`, saturating at
    /// [`Timestamp::NEVER`].
    #[inline]
    pub fn offset(self, secs: u32) -> Timestamp {
        Timestamp(self.0.saturating_add(secs as i64))
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }

    /// Hour, minute and second of the day in UTC.
    pub fn hms(self) -> (u32, u32, u32) {
        let secs = self.0.rem_euclid(86_400);
        ((secs / 3_600) as u32, ((secs % 3_600) / 60) as u32, (secs % 60) as u32)
    }
}

impl std::ops::Add<u32> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u32) -> Timestamp {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> i64 {
        self.since(rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Timestamp::NEVER {
            return f.write_str("never");
        }
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
